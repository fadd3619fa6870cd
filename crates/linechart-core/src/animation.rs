// File: crates/linechart-core/src/animation.rs
// Summary: Explicit animation schedules (tweens) for path reveal and staggered point growth,
// and a timeline that samples them against an elapsed clock.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 { 4.0 * t * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0 }
            }
        }
    }
}

/// One animated scalar: holds `from` until `start_delay_ms`, then eases to `to` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub start_delay_ms: f64,
    pub duration_ms: f64,
    pub from: f64,
    pub to: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - self.start_delay_ms;
        if local < 0.0 {
            return self.from;
        }
        if self.duration_ms <= 0.0 || local >= self.duration_ms {
            return self.to;
        }
        let k = self.easing.apply(local / self.duration_ms);
        self.from + (self.to - self.from) * k
    }

    pub fn end_ms(&self) -> f64 {
        self.start_delay_ms + self.duration_ms.max(0.0)
    }
}

/// Timing for one series: a linear reveal of the whole path plus one growth tween per point.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSchedule {
    pub reveal: Tween,
    pub points: Vec<Tween>,
}

/// Sampled state of one series at some instant.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesFrame {
    pub reveal_length: f64,
    pub radii: Vec<f64>,
}

/// Build the schedule for a path of `path_length` with `point_count` markers.
/// Point `i` starts at `i * total / point_count` and grows over `total / 2`.
pub fn animate(path_length: f64, point_count: usize, total_duration_ms: f64, point_radius: f64) -> SeriesSchedule {
    let total = if total_duration_ms.is_finite() { total_duration_ms.max(0.0) } else { 0.0 };
    let reveal = Tween { start_delay_ms: 0.0, duration_ms: total, from: 0.0, to: path_length, easing: Easing::Linear };
    let stagger = if point_count > 0 { total / point_count as f64 } else { 0.0 };
    let points = (0..point_count)
        .map(|i| Tween {
            start_delay_ms: i as f64 * stagger,
            duration_ms: total / 2.0,
            from: 0.0,
            to: point_radius,
            easing: Easing::CubicInOut,
        })
        .collect();
    SeriesSchedule { reveal, points }
}

impl SeriesSchedule {
    pub fn sample(&self, elapsed_ms: f64) -> SeriesFrame {
        SeriesFrame {
            reveal_length: self.reveal.value_at(elapsed_ms),
            radii: self.points.iter().map(|t| t.value_at(elapsed_ms)).collect(),
        }
    }

    pub fn end_ms(&self) -> f64 {
        self.points.iter().map(Tween::end_ms).fold(self.reveal.end_ms(), f64::max)
    }
}

/// All series schedules of one render plus the clock driving them.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    schedules: Vec<SeriesSchedule>,
    elapsed_ms: f64,
}

impl Timeline {
    pub fn new(schedules: Vec<SeriesSchedule>) -> Self {
        Self { schedules, elapsed_ms: 0.0 }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.schedules.iter().map(SeriesSchedule::end_ms).fold(0.0, f64::max)
    }

    /// Jump the clock to the end of the longest schedule.
    pub fn finish(&mut self) {
        self.elapsed_ms = self.elapsed_ms.max(self.duration_ms());
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms()
    }

    pub fn sample(&self) -> Vec<SeriesFrame> {
        self.schedules.iter().map(|s| s.sample(self.elapsed_ms)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints() {
        for e in [Easing::Linear, Easing::CubicInOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
        }
        assert_eq!(Easing::CubicInOut.apply(0.5), 0.5);
    }

    #[test]
    fn tween_holds_before_delay() {
        let t = Tween { start_delay_ms: 100.0, duration_ms: 200.0, from: 0.0, to: 4.0, easing: Easing::Linear };
        assert_eq!(t.value_at(50.0), 0.0);
        assert_eq!(t.value_at(200.0), 2.0);
        assert_eq!(t.value_at(400.0), 4.0);
        assert_eq!(t.end_ms(), 300.0);
    }

    #[test]
    fn timeline_runs_to_completion() {
        let mut tl = Timeline::new(vec![animate(100.0, 4, 1000.0, 4.0)]);
        // last point starts at 750ms and lasts 500ms
        assert_eq!(tl.duration_ms(), 1250.0);
        tl.advance(600.0);
        assert!(!tl.is_finished());
        let before = tl.sample();
        tl.advance(-5.0);
        assert_eq!(tl.sample(), before);
        tl.advance(700.0);
        assert!(tl.is_finished());
        let frame = &tl.sample()[0];
        assert_eq!(frame.reveal_length, 100.0);
        assert!(frame.radii.iter().all(|&r| r == 4.0));
    }
}
