use rand::prelude::*;
use smallvec::SmallVec;

// Particles per spawn trigger.
pub const BURST_SIZE: usize = 3;

// Minimum gap between throttled continuous spawns (~60 Hz).
pub const SPAWN_THROTTLE_MS: f64 = 16.0;

// Random scatter applied around the pointer, per axis.
pub const OFFSET_RANGE_PX: f64 = 5.0;

// Particle lifetime range (seconds).
pub const DURATION_MIN_SEC: f64 = 0.6;
pub const DURATION_MAX_SEC: f64 = 1.0;

// Size roll range and class thresholds.
pub const SIZE_ROLL_MIN: f64 = 0.5;
pub const SIZE_ROLL_MAX: f64 = 1.0;
pub const SIZE_LARGE_THRESHOLD: f64 = 0.8;
pub const SIZE_MEDIUM_THRESHOLD: f64 = 0.65;

// Hue drifts with wall-clock time and steps per particle within a burst.
pub const HUE_TIME_SCALE: f64 = 0.1;
pub const HUE_STEP_DEG: f64 = 60.0;

const GRADIENT_OPACITIES: [f32; 5] = [0.9, 0.7, 0.5, 0.4, 0.3];
const GRADIENT_RADII_PCT: [u32; 5] = [0, 25, 50, 75, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Base,
    Medium,
    Large,
}

impl SizeClass {
    /// Extra CSS class for the node, if any; base-size particles carry none.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SizeClass::Base => None,
            SizeClass::Medium => Some("medium"),
            SizeClass::Large => Some("large"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    pub hue: f32,
    pub opacity: f32,
    pub radius_pct: u32,
}

/// Everything the presentation surface needs to realize one particle.
#[derive(Clone, Debug)]
pub struct ParticleSpec {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: SizeClass,
    pub duration_sec: f64,
    pub stops: [GradientStop; 5],
}

pub fn classify_size(roll: f64) -> SizeClass {
    if roll > SIZE_LARGE_THRESHOLD {
        SizeClass::Large
    } else if roll > SIZE_MEDIUM_THRESHOLD {
        SizeClass::Medium
    } else {
        SizeClass::Base
    }
}

#[inline]
pub fn wrap_hue(deg: f64) -> f32 {
    deg.rem_euclid(360.0) as f32
}

/// Five-stop rainbow gradient anchored at `base_hue`, fading out with radius.
pub fn gradient_stops(base_hue: f32) -> [GradientStop; 5] {
    let mut stops = [GradientStop {
        hue: 0.0,
        opacity: 0.0,
        radius_pct: 0,
    }; 5];
    for (k, stop) in stops.iter_mut().enumerate() {
        stop.hue = wrap_hue(base_hue as f64 + k as f64 * HUE_STEP_DEG);
        stop.opacity = GRADIENT_OPACITIES[k];
        stop.radius_pct = GRADIENT_RADII_PCT[k];
    }
    stops
}

/// CSS `background` value for a particle's gradient.
pub fn gradient_css(stops: &[GradientStop; 5]) -> String {
    let mut css = String::from("radial-gradient(circle");
    for stop in stops {
        css.push_str(&format!(
            ", hsla({:.0}, 100%, 60%, {}) {}%",
            stop.hue, stop.opacity, stop.radius_pct
        ));
    }
    css.push(')');
    css
}

/// Gate for the continuous spawn loop: accepts at most one call per
/// `SPAWN_THROTTLE_MS`. The timestamp advances only on accepted calls.
#[derive(Default)]
pub struct SpawnThrottle {
    last_ms: Option<f64>,
}

impl SpawnThrottle {
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < SPAWN_THROTTLE_MS => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Pure trail state: last pointer position plus the set of live particle ids.
///
/// The engine never touches the presentation surface. It hands out
/// `ParticleSpec`s and tracks ids; the caller realizes and removes nodes and
/// reports expiry back via `expire`.
pub struct TrailEngine {
    pointer_x: f64,
    pointer_y: f64,
    active: Vec<u64>,
    rng: StdRng,
    next_id: u64,
}

impl TrailEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            pointer_x: 0.0,
            pointer_y: 0.0,
            active: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn pointer(&self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    /// One burst of `BURST_SIZE` particle specs scattered around (x, y).
    /// Every returned id is registered in the active set.
    pub fn spawn_burst(
        &mut self,
        x: f64,
        y: f64,
        now_ms: f64,
    ) -> SmallVec<[ParticleSpec; BURST_SIZE]> {
        let mut burst = SmallVec::new();
        for i in 0..BURST_SIZE {
            let id = self.next_id;
            self.next_id += 1;

            let off_x = self.rng.gen_range(-OFFSET_RANGE_PX..OFFSET_RANGE_PX);
            let off_y = self.rng.gen_range(-OFFSET_RANGE_PX..OFFSET_RANGE_PX);
            let roll = self.rng.gen_range(SIZE_ROLL_MIN..SIZE_ROLL_MAX);
            let duration = self.rng.gen_range(DURATION_MIN_SEC..DURATION_MAX_SEC);
            let hue = wrap_hue(now_ms * HUE_TIME_SCALE + i as f64 * HUE_STEP_DEG);

            self.active.push(id);
            burst.push(ParticleSpec {
                id,
                x: x + off_x,
                y: y + off_y,
                size: classify_size(roll),
                duration_sec: duration,
                stops: gradient_stops(hue),
            });
        }
        burst
    }

    /// Drops `id` from the active set. Idempotent: a second call (e.g. an
    /// expiry timer firing after teardown) returns false and changes nothing.
    pub fn expire(&mut self, id: u64) -> bool {
        match self.active.iter().position(|&p| p == id) {
            Some(idx) => {
                self.active.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drains the active set, returning every id that was still live so the
    /// caller can remove the matching nodes.
    pub fn teardown(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.active)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, id: u64) -> bool {
        self.active.contains(&id)
    }
}
