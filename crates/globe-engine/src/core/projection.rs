use glam::Vec2;

/// Orthographic globe projection.
///
/// Maps lon/lat degrees to surface coordinates: the sphere is rotated by
/// the current rotation triple, then the front hemisphere is projected
/// onto the view plane. Surface Y grows downward.
#[derive(Debug, Clone)]
pub struct Orthographic {
    /// Rotation in degrees: longitude spin, latitude tilt, roll.
    /// The drag path only ever writes the first two; roll stays 0.
    rotate: [f32; 3],
    /// Sphere radius in surface units.
    scale: f32,
    /// Surface position of the sphere center.
    translate: Vec2,
    /// Angular clip radius in degrees. Points farther than this from the
    /// view center are not visible; 90 clips the back hemisphere.
    clip_angle: f32,
}

impl Orthographic {
    pub fn new() -> Self {
        Self {
            rotate: [0.0, 0.0, 0.0],
            scale: 270.0,
            translate: Vec2::new(480.0, 480.0),
            clip_angle: 90.0,
        }
    }

    // -- Builder pattern --

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_translate(mut self, translate: Vec2) -> Self {
        self.translate = translate;
        self
    }

    pub fn with_clip_angle(mut self, clip_angle: f32) -> Self {
        self.clip_angle = clip_angle;
        self
    }

    pub fn with_rotation(mut self, rotate: [f32; 3]) -> Self {
        self.rotate = rotate;
        self
    }

    /// Current rotation triple in degrees.
    pub fn rotation(&self) -> [f32; 3] {
        self.rotate
    }

    /// Set the longitude/latitude rotation. Roll is left untouched.
    pub fn set_rotation(&mut self, lambda: f32, phi: f32) {
        self.rotate[0] = lambda;
        self.rotate[1] = phi;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Apply the rotation to a lon/lat coordinate (degrees in, radians out).
    /// Longitude spin first, then the latitude tilt about the new axis.
    fn rotate_coord(&self, coord: Vec2) -> (f32, f32) {
        let delta_lambda = self.rotate[0].to_radians();
        let delta_phi = self.rotate[1].to_radians();

        let lambda = coord.x.to_radians() + delta_lambda;
        let phi = coord.y.to_radians();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();

        let (sin_dp, cos_dp) = delta_phi.sin_cos();
        let k = z * cos_dp + x * sin_dp;
        let lambda_r = y.atan2(x * cos_dp - z * sin_dp);
        let phi_r = k.clamp(-1.0, 1.0).asin();
        (lambda_r, phi_r)
    }

    /// Forward map of a rotated coordinate (radians) to surface space.
    fn planar(&self, lambda: f32, phi: f32) -> Vec2 {
        Vec2::new(
            self.translate.x + self.scale * phi.cos() * lambda.sin(),
            self.translate.y - self.scale * phi.sin(),
        )
    }

    /// Project a lon/lat coordinate (degrees). Returns `None` when the
    /// rotated point lies beyond the clip angle from the view center.
    pub fn project(&self, coord: Vec2) -> Option<Vec2> {
        let (lambda, phi) = self.rotate_coord(coord);
        // Angular distance from the view center: cos(c) = cos(phi)cos(lambda).
        let cos_c = phi.cos() * lambda.cos();
        if cos_c < self.clip_angle.to_radians().cos() {
            return None;
        }
        Some(self.planar(lambda, phi))
    }

    /// Project without the clip test. Markers use this: every marker gets
    /// a surface position even when its coordinate faces away.
    pub fn project_unclipped(&self, coord: Vec2) -> Vec2 {
        let (lambda, phi) = self.rotate_coord(coord);
        self.planar(lambda, phi)
    }
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new()
    }
}
