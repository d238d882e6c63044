//! Device capability detection, read once at startup.
//!
//! The derived flags configure which effects the page runs; they are never
//! re-evaluated, so rotating a tablet mid-session keeps the startup
//! profile.
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceConfig {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_touch: bool,
    pub reduced_motion: bool,
    pub enable_animations: bool,
    pub enable_hover_effects: bool,
    pub particle_count: u32,
    pub animation_speed_factor: f64,
}

impl DeviceConfig {
    pub fn from_capabilities(viewport_width: f64, touch: bool, reduced_motion: bool) -> Self {
        let is_mobile = viewport_width <= MOBILE_MAX_WIDTH;
        let is_tablet = viewport_width <= TABLET_MAX_WIDTH && !is_mobile;
        Self {
            is_mobile,
            is_tablet,
            is_touch: touch,
            reduced_motion,
            enable_animations: !reduced_motion,
            enable_hover_effects: !touch && !is_mobile,
            particle_count: if is_mobile {
                0
            } else if is_tablet {
                25
            } else {
                50
            },
            animation_speed_factor: if is_mobile { 0.5 } else { 1.0 },
        }
    }

    /// Reads viewport width, touch capability and the motion preference
    /// from the host. Any capability that cannot be read falls back to the
    /// desktop default.
    pub fn detect() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::from_capabilities(TABLET_MAX_WIDTH + 1.0, false, false);
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(TABLET_MAX_WIDTH + 1.0);
        let touch = Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart"))
            .unwrap_or(false)
            || window.navigator().max_touch_points() > 0;
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        Self::from_capabilities(width, touch, reduced_motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_profile() {
        let config = DeviceConfig::from_capabilities(1440.0, false, false);
        assert!(!config.is_mobile);
        assert!(!config.is_tablet);
        assert!(config.enable_animations);
        assert!(config.enable_hover_effects);
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.animation_speed_factor, 1.0);
    }

    #[test]
    fn mobile_profile() {
        let config = DeviceConfig::from_capabilities(375.0, true, false);
        assert!(config.is_mobile);
        assert!(!config.is_tablet);
        assert!(!config.enable_hover_effects);
        assert_eq!(config.particle_count, 0);
        assert_eq!(config.animation_speed_factor, 0.5);
    }

    #[test]
    fn tablet_profile() {
        let config = DeviceConfig::from_capabilities(900.0, true, false);
        assert!(!config.is_mobile);
        assert!(config.is_tablet);
        assert_eq!(config.particle_count, 25);
    }

    #[test]
    fn width_boundaries() {
        assert!(DeviceConfig::from_capabilities(768.0, false, false).is_mobile);
        assert!(DeviceConfig::from_capabilities(769.0, false, false).is_tablet);
        assert!(DeviceConfig::from_capabilities(1024.0, false, false).is_tablet);
        assert!(!DeviceConfig::from_capabilities(1025.0, false, false).is_tablet);
    }

    #[test]
    fn reduced_motion_disables_animations_only() {
        let config = DeviceConfig::from_capabilities(1440.0, false, true);
        assert!(!config.enable_animations);
        assert!(config.enable_hover_effects);
        assert_eq!(config.particle_count, 50);
    }

    #[test]
    fn touch_desktop_keeps_animations_but_not_hover() {
        let config = DeviceConfig::from_capabilities(1440.0, true, false);
        assert!(config.enable_animations);
        assert!(!config.enable_hover_effects);
    }
}
