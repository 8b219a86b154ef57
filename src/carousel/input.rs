//! Discrete input vocabulary for the carousel

/// Direction of a button or arrow-key step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Towards the first card (left)
    Back,
    /// Towards the last card (right)
    Forward,
}

impl StepDirection {
    /// Map a signed direction (`-1` / `+1`) from the host; zero maps to `None`
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign.signum() {
            -1 => Some(StepDirection::Back),
            1 => Some(StepDirection::Forward),
            _ => None,
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            StepDirection::Back => -1.0,
            StepDirection::Forward => 1.0,
        }
    }
}

/// Whether a wheel event was consumed by the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Redirected into horizontal motion; the host must prevent page scroll
    Intercepted,
    /// Left for the host to scroll natively
    PassThrough,
}

impl WheelOutcome {
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, WheelOutcome::Intercepted)
    }
}

/// Keyboard keys relevant to carousel navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }

    pub fn direction(&self) -> Option<StepDirection> {
        match self {
            NavKey::ArrowLeft => Some(StepDirection::Back),
            NavKey::ArrowRight => Some(StepDirection::Forward),
            NavKey::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sign() {
        assert_eq!(StepDirection::from_sign(-1), Some(StepDirection::Back));
        assert_eq!(StepDirection::from_sign(1), Some(StepDirection::Forward));
        assert_eq!(StepDirection::from_sign(7), Some(StepDirection::Forward));
        assert_eq!(StepDirection::from_sign(0), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_key_name("ArrowLeft"), NavKey::ArrowLeft);
        assert_eq!(NavKey::from_key_name("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(NavKey::from_key_name("Enter"), NavKey::Other);
        assert_eq!(NavKey::Other.direction(), None);
    }
}
