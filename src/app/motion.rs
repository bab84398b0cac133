//! Transition descriptors and presentation helpers.
//!
//! The browser does the interpolation; this module only turns declared
//! intent (spring or tween, start and end poses) into CSS strings and
//! Tailwind class literals.

/// CSS easing curves used by the header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    /// Curve with a small overshoot, used for underdamped springs
    Overshoot,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::EaseOut => "cubic-bezier(0.22, 1, 0.36, 1)",
            Easing::Overshoot => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// How a property animates from one value to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Fixed duration with an easing curve
    Tween { duration_ms: u32, easing: Easing },
    /// Damped harmonic spring, approximated by a duration and easing
    Spring {
        stiffness: f64,
        damping: f64,
        mass: f64,
    },
}

/// Spring used by the active-link indicator.
pub const INDICATOR_SPRING: Transition = Transition::Spring {
    stiffness: 500.0,
    damping: 30.0,
    mass: 1.0,
};

/// Drawer slide/fade.
pub const DRAWER_TWEEN: Transition = Transition::Tween {
    duration_ms: 250,
    easing: Easing::EaseOut,
};

impl Transition {
    /// Damping ratio of a spring (1.0 is critically damped).
    fn damping_ratio(stiffness: f64, damping: f64, mass: f64) -> f64 {
        damping / (2.0 * (stiffness * mass).sqrt())
    }

    /// Time until the animated value stays within 2% of its target.
    pub fn duration_ms(&self) -> u32 {
        match *self {
            Transition::Tween { duration_ms, .. } => duration_ms,
            Transition::Spring {
                stiffness,
                damping,
                mass,
            } => {
                if stiffness <= 0.0 || mass <= 0.0 {
                    return 0;
                }
                let omega = (stiffness / mass).sqrt();
                let zeta = Self::damping_ratio(stiffness, damping, mass);
                // Decay rate of the slowest mode
                let decay = if zeta < 1.0 {
                    zeta * omega
                } else {
                    omega * (zeta - (zeta * zeta - 1.0).sqrt())
                };
                if decay <= 0.0 {
                    return 0;
                }
                (4.0 / decay * 1000.0).round() as u32
            }
        }
    }

    pub fn easing(&self) -> Easing {
        match *self {
            Transition::Tween { easing, .. } => easing,
            Transition::Spring {
                stiffness,
                damping,
                mass,
            } => {
                if Self::damping_ratio(stiffness, damping, mass) < 1.0 {
                    Easing::Overshoot
                } else {
                    Easing::EaseOut
                }
            }
        }
    }

    /// CSS `transition` value applying this timing to each property.
    pub fn css(&self, properties: &[&str]) -> String {
        let duration = self.duration_ms();
        let easing = self.easing().css();
        properties
            .iter()
            .map(|p| format!("{p} {duration}ms {easing}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Viewport width at which the header switches from drawer to link row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Breakpoint {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Breakpoint {
    // Full class literals so Tailwind's scanner picks them up.

    /// Classes for the desktop link row: hidden below the breakpoint.
    pub fn desktop_row(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "hidden sm:grid",
            Breakpoint::Md => "hidden md:grid",
            Breakpoint::Lg => "hidden lg:grid",
        }
    }

    /// Classes for mobile-only elements: hidden at or above the breakpoint.
    pub fn mobile_only(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm:hidden",
            Breakpoint::Md => "md:hidden",
            Breakpoint::Lg => "lg:hidden",
        }
    }

    pub fn nav_padding(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "px-5 sm:px-10",
            Breakpoint::Md => "px-5 md:px-10",
            Breakpoint::Lg => "px-5 lg:px-10",
        }
    }
}

/// Position of the shared underline beneath the desktop row.
///
/// Links sit in equal-width grid cells, so the bar for cell `index` spans
/// `[index / count, (index + 1) / count)` of the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorPlacement {
    pub index: usize,
    pub count: usize,
}

impl IndicatorPlacement {
    pub fn new(index: usize, count: usize) -> Option<Self> {
        (index < count).then_some(Self { index, count })
    }

    pub fn left_percent(&self) -> f64 {
        self.index as f64 * 100.0 / self.count as f64
    }

    pub fn width_percent(&self) -> f64 {
        100.0 / self.count as f64
    }

    pub fn style(&self, transition: &Transition) -> String {
        format!(
            "left: {:.4}%; width: {:.4}%; transition: {};",
            self.left_percent(),
            self.width_percent(),
            transition.css(&["left", "width"])
        )
    }
}

/// Visual endpoint of the drawer's enter/exit transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerPose {
    /// Offset upward and transparent (initial and exit pose)
    Offset,
    /// Resting position, fully opaque
    Rest,
}

impl DrawerPose {
    pub fn classes(&self) -> &'static str {
        match self {
            DrawerPose::Offset => "opacity-0 -translate-y-5",
            DrawerPose::Rest => "opacity-100 translate-y-0",
        }
    }
}
