use glam::{Mat4, Quat, Vec3};
use std::time::Instant;

use crate::core::{Action, ActionState, Clock, FrameStats, KeyMap, WinitKeyMap};
use crate::math::{self, Basis, ClipDepth};
use crate::settings::CameraSettings;
use crate::types::CameraUniform;

/// Roll rate while Q/E is held, radians per second before halving
pub const ROLL_SPEED: f32 = 1.5;
pub const DEFAULT_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Bounds used by `set_fov_degrees_clamped`
pub const MIN_FOV_DEGREES: f32 = 1.0;
pub const MAX_FOV_DEGREES: f32 = 179.0;

/// Free-fly camera.
///
/// Keyboard actions translate and roll the camera once per `update`, scaled
/// by elapsed time. Mouse deltas yaw and pitch it immediately. View and
/// projection matrices are cached and rebuilt eagerly whenever something
/// they depend on changes.
///
/// Nothing here validates its input: zero viewports, absurd FOVs or NaN
/// deltas simply produce degenerate matrices.
#[derive(Debug, Clone)]
pub struct Camera<M = WinitKeyMap> {
    position: Vec3,
    orientation: Quat,

    view: Mat4,
    projection: Mat4,

    fov_degrees: f32,
    width: f32,
    height: f32,
    tan_half_fov_x: f32,
    tan_half_fov_y: f32,
    clip_depth: ClipDepth,

    pub mouse_sensitivity: f32,
    pub forward_speed: f32,
    pub strafe_speed: f32,

    actions: ActionState,
    clock: Clock,
    stats: FrameStats,
    keymap: M,
}

impl Camera<WinitKeyMap> {
    pub fn new() -> Self {
        Self::with_keymap(WinitKeyMap)
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::with_keymap_and_settings(WinitKeyMap, settings)
    }
}

impl Default for Camera<WinitKeyMap> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Camera<M> {
    /// Camera with default tuning reading keys through `keymap`
    pub fn with_keymap(keymap: M) -> Self {
        Self::with_keymap_and_settings(keymap, &CameraSettings::default())
    }

    pub fn with_keymap_and_settings(keymap: M, settings: &CameraSettings) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            fov_degrees: settings.fov_degrees,
            width: DEFAULT_ASPECT_RATIO,
            height: 1.0,
            tan_half_fov_x: 0.0,
            tan_half_fov_y: 0.0,
            clip_depth: settings.clip_depth,
            mouse_sensitivity: settings.mouse_sensitivity,
            forward_speed: settings.forward_speed,
            strafe_speed: settings.strafe_speed,
            actions: ActionState::default(),
            clock: Clock::new(),
            stats: FrameStats::default(),
            keymap,
        };
        camera.recalc_projection();
        camera.recalc_view();
        camera
    }

    /// Replace all tunables at once; pose and input state are kept
    pub fn apply_settings(&mut self, settings: &CameraSettings) {
        self.mouse_sensitivity = settings.mouse_sensitivity;
        self.forward_speed = settings.forward_speed;
        self.strafe_speed = settings.strafe_speed;
        self.fov_degrees = settings.fov_degrees;
        self.clip_depth = settings.clip_depth;
        self.recalc_projection();
    }

    // === Field of view / viewport ===

    /// Horizontal field of view in degrees
    pub fn set_fov_degrees(&mut self, fov: f32) {
        self.fov_degrees = fov;
        self.recalc_projection();
    }

    /// Like `set_fov_degrees`, but keeps the value within a usable range
    pub fn set_fov_degrees_clamped(&mut self, fov: f32) {
        self.set_fov_degrees(fov.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES));
    }

    /// Viewport size in pixels (or any unit, as long as it is consistent)
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        log::debug!("Camera viewport set to {}x{}", width, height);
        self.recalc_projection();
    }

    pub fn set_clip_depth(&mut self, depth: ClipDepth) {
        self.clip_depth = depth;
        self.recalc_projection();
    }

    // === Input state ===

    /// Record a key press or release.
    ///
    /// Returns false, changing nothing, if the key map does not bind `key`.
    pub fn set_key_state<K>(&mut self, key: K, pressed: bool) -> bool
    where
        M: KeyMap<K>,
    {
        match self.keymap.action(key) {
            Some(action) => {
                self.actions.set(action, pressed);
                true
            }
            None => false,
        }
    }

    pub fn set_action(&mut self, action: Action, pressed: bool) {
        self.actions.set(action, pressed);
    }

    /// Release every action, e.g. when the window loses focus
    pub fn reset_key_state(&mut self) {
        self.actions.clear();
    }

    // === Mouse look ===

    /// Yaw and pitch by a pointer delta in viewport units.
    ///
    /// The angle is derived from the current FOV and viewport so a given
    /// delta maps to the same on-screen motion at any window size. Not
    /// scaled by frame time.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        let yaw = self.mouse_sensitivity * (2.0 * dx * self.tan_half_fov_x / self.width).atan();
        let pitch = self.mouse_sensitivity * (2.0 * dy * self.tan_half_fov_y / self.height).atan();

        let delta = math::quat_from_euler(pitch, yaw, 0.0);
        self.orientation = math::compose(delta, self.orientation);
        self.recalc_view();
    }

    // === Per-frame update ===

    /// Advance by the wall-clock time since the previous update.
    /// Returns the elapsed seconds that were applied.
    pub fn update(&mut self) -> f32 {
        self.update_at(Instant::now())
    }

    /// Advance to `now`. The first call after construction or
    /// `reset_clock` applies zero elapsed time.
    pub fn update_at(&mut self, now: Instant) -> f32 {
        let delta = self.clock.tick_at(now);
        self.advance(delta);
        delta
    }

    /// Integrate `delta` seconds of keyboard motion and rebuild the view
    pub fn advance(&mut self, delta: f32) {
        self.stats.record(delta);

        let basis = Basis::from_orientation(self.orientation);

        let strafe = self.actions.axis(Action::Right, Action::Left) * self.strafe_speed;
        let lift = self.actions.axis(Action::Up, Action::Down) * self.strafe_speed;
        let thrust = self.actions.axis(Action::Forward, Action::Back) * self.forward_speed;

        self.position += basis.right * (strafe * delta)
            + basis.up * (lift * delta)
            + basis.forward() * (thrust * delta);

        let roll = self.actions.axis(Action::RollCw, Action::RollCcw) * ROLL_SPEED * delta;
        if roll != 0.0 {
            self.orientation = math::compose(math::quat_from_euler(0.0, 0.0, roll), self.orientation);
        }

        self.recalc_view();
        log::trace!(
            "Camera update: dt={:.4}s position={:?} orientation={:?}",
            delta,
            self.position,
            self.orientation
        );
    }

    /// Forget the previous update time, e.g. after the host was paused
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    // === Pose ===

    /// Place the camera directly. `orientation` is normalized.
    pub fn set_pose(&mut self, position: Vec3, orientation: Quat) {
        self.position = position;
        self.orientation = orientation.normalize();
        self.recalc_view();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn basis(&self) -> Basis {
        Basis::from_orientation(self.orientation)
    }

    // === Derived state ===

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform::new(self.view, self.projection, self.position)
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn clip_depth(&self) -> ClipDepth {
        self.clip_depth
    }

    pub fn tan_half_fov_x(&self) -> f32 {
        self.tan_half_fov_x
    }

    pub fn tan_half_fov_y(&self) -> f32 {
        self.tan_half_fov_y
    }

    pub fn actions(&self) -> &ActionState {
        &self.actions
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    fn recalc_view(&mut self) {
        self.view = math::view_matrix(self.position, self.orientation);
    }

    fn recalc_projection(&mut self) {
        let fov_radians = self.fov_degrees.to_radians();
        self.tan_half_fov_x = fov_radians.tan();
        self.tan_half_fov_y = self.tan_half_fov_x * self.height / self.width;

        self.projection = math::perspective(fov_radians, self.width, self.height, self.clip_depth);
        log::debug!(
            "Projection rebuilt: fov={}deg viewport={}x{} depth={:?}",
            self.fov_degrees,
            self.width,
            self.height,
            self.clip_depth
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use winit::keyboard::KeyCode;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_new_camera_defaults() {
        let camera = Camera::new();

        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.orientation(), Quat::IDENTITY);
        assert_eq!(camera.fov_degrees(), 65.0);
        assert_eq!(camera.screen_size(), (DEFAULT_ASPECT_RATIO, 1.0));
        assert_eq!(camera.mouse_sensitivity, 0.5);
        assert_eq!(camera.forward_speed, 10.0);
        assert_eq!(camera.strafe_speed, 5.0);
        assert_eq!(camera.view_matrix(), Mat4::IDENTITY);
        assert!(!camera.actions().any());
        assert_eq!(camera.stats().frames_rendered, 0);
    }

    #[test]
    fn test_constructor_builds_projection() {
        let camera = Camera::new();
        let expected_x = 65.0_f32.to_radians().tan();

        assert!((camera.tan_half_fov_x() - expected_x).abs() < EPS);
        assert!((camera.tan_half_fov_y() - expected_x / DEFAULT_ASPECT_RATIO).abs() < EPS);
        assert_ne!(camera.projection_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_fov_clamped() {
        let mut camera = Camera::new();

        camera.set_fov_degrees_clamped(250.0);
        assert_eq!(camera.fov_degrees(), MAX_FOV_DEGREES);

        camera.set_fov_degrees_clamped(-10.0);
        assert_eq!(camera.fov_degrees(), MIN_FOV_DEGREES);

        camera.set_fov_degrees_clamped(90.0);
        assert_eq!(camera.fov_degrees(), 90.0);
    }

    #[test]
    fn test_unclamped_fov_is_accepted() {
        let mut camera = Camera::new();
        camera.set_fov_degrees(200.0);
        assert_eq!(camera.fov_degrees(), 200.0);
    }

    #[test]
    fn test_first_update_is_zero_delta() {
        let mut camera = Camera::new();
        camera.set_action(Action::Forward, true);

        let delta = camera.update_at(Instant::now());

        assert_eq!(delta, 0.0);
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.stats().frames_rendered, 1);
    }

    #[test]
    fn test_reset_clock_skips_pause() {
        let mut camera = Camera::new();
        let t0 = Instant::now();
        camera.update_at(t0);

        camera.reset_clock();
        camera.set_action(Action::Forward, true);
        camera.update_at(t0 + Duration::from_secs(60));

        assert_eq!(camera.position(), Vec3::ZERO);
    }

    #[test]
    fn test_key_state_through_winit_map() {
        let mut camera = Camera::new();

        assert!(camera.set_key_state(KeyCode::KeyD, true));
        assert!(camera.actions().is_down(Action::Right));

        assert!(camera.set_key_state(KeyCode::KeyD, false));
        assert!(!camera.actions().is_down(Action::Right));

        assert!(!camera.set_key_state(KeyCode::Escape, true));
        assert!(!camera.actions().any());
    }

    #[test]
    fn test_custom_keymap() {
        let arrows = |c: char| match c {
            '^' => Some(Action::Forward),
            'v' => Some(Action::Back),
            _ => None,
        };
        let mut camera = Camera::with_keymap(arrows);

        assert!(camera.set_key_state('^', true));
        assert!(camera.actions().is_down(Action::Forward));
        assert!(!camera.set_key_state('w', true));
    }

    #[test]
    fn test_roll_directions() {
        let mut cw = Camera::new();
        cw.set_action(Action::RollCw, true);
        cw.advance(0.2);

        let mut ccw = Camera::new();
        ccw.set_action(Action::RollCcw, true);
        ccw.advance(0.2);

        // Clockwise rolls positively about view Z, by half of rate * dt
        let expected = Quat::from_rotation_z(ROLL_SPEED * 0.2 * 0.5);
        assert!(cw.orientation().abs_diff_eq(expected, EPS));
        assert!(ccw.orientation().abs_diff_eq(expected.inverse(), EPS));
        assert_eq!(cw.position(), Vec3::ZERO);
    }

    #[test]
    fn test_strafe_uses_strafe_speed() {
        let mut camera = Camera::new();
        camera.strafe_speed = 2.0;
        camera.set_action(Action::Left, true);
        camera.advance(0.5);

        assert!(camera.position().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn test_vertical_uses_strafe_speed() {
        let mut camera = Camera::new();
        camera.set_action(Action::Up, true);
        camera.advance(0.1);

        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.5, 0.0), EPS));
    }

    #[test]
    fn test_movement_follows_orientation() {
        let mut camera = Camera::new();
        let orientation = Quat::from_rotation_y(0.7);
        camera.set_pose(Vec3::ZERO, orientation);
        camera.set_action(Action::Forward, true);
        camera.advance(1.0);

        let forward = Basis::from_orientation(orientation).forward();
        assert!(camera.position().abs_diff_eq(forward * 10.0, 1e-4));
    }

    #[test]
    fn test_mouse_yaw_matches_formula() {
        let mut camera = Camera::new();
        camera.set_screen_size(800.0, 600.0);

        camera.process_mouse_movement(40.0, 0.0);

        let yaw = 0.5 * (2.0 * 40.0 * camera.tan_half_fov_x() / 800.0).atan();
        let expected = Quat::from_rotation_y(yaw * 0.5);
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_mouse_pitch_matches_formula() {
        let mut camera = Camera::new();
        camera.set_screen_size(800.0, 600.0);

        camera.process_mouse_movement(0.0, -25.0);

        let pitch = 0.5 * (2.0 * -25.0 * camera.tan_half_fov_y() / 600.0).atan();
        let expected = Quat::from_rotation_x(pitch * 0.5);
        assert!(camera.orientation().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_mouse_look_independent_of_window_scale() {
        let mut small = Camera::new();
        small.set_screen_size(640.0, 360.0);
        small.process_mouse_movement(64.0, 36.0);

        let mut large = Camera::new();
        large.set_screen_size(1280.0, 720.0);
        large.process_mouse_movement(128.0, 72.0);

        assert!(small.orientation().abs_diff_eq(large.orientation(), EPS));
    }

    #[test]
    fn test_mouse_movement_rebuilds_view_immediately() {
        let mut camera = Camera::new();
        camera.set_pose(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);
        let before = camera.view_matrix();

        camera.process_mouse_movement(10.0, 5.0);

        assert_ne!(camera.view_matrix(), before);
        assert_eq!(
            camera.view_matrix(),
            math::view_matrix(camera.position(), camera.orientation())
        );
    }

    #[test]
    fn test_apply_settings_keeps_pose() {
        let mut camera = Camera::new();
        camera.set_pose(Vec3::new(4.0, 0.0, 0.0), Quat::from_rotation_x(0.2));
        camera.set_action(Action::Up, true);

        let settings = CameraSettings {
            fov_degrees: 80.0,
            mouse_sensitivity: 1.0,
            forward_speed: 20.0,
            strafe_speed: 7.0,
            clip_depth: ClipDepth::ZeroToOne,
        };
        camera.apply_settings(&settings);

        assert_eq!(camera.position(), Vec3::new(4.0, 0.0, 0.0));
        assert!(camera.actions().is_down(Action::Up));
        assert_eq!(camera.fov_degrees(), 80.0);
        assert_eq!(camera.forward_speed, 20.0);
        assert_eq!(camera.clip_depth(), ClipDepth::ZeroToOne);
        assert!((camera.tan_half_fov_x() - 80.0_f32.to_radians().tan()).abs() < EPS);
    }

    #[test]
    fn test_uniform_carries_matrices() {
        let mut camera = Camera::new();
        camera.set_pose(Vec3::new(0.0, 1.0, 2.0), Quat::from_rotation_y(0.3));

        let uniform = camera.to_uniform();
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.projection, camera.projection_matrix().to_cols_array_2d());
        assert_eq!(
            uniform.view_proj,
            (camera.projection_matrix() * camera.view_matrix()).to_cols_array_2d()
        );
        assert_eq!(uniform.position, [0.0, 1.0, 2.0]);
    }
}
