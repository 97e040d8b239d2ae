//! Software-projected drawing of the cube using egui shapes.

use std::f32::consts::FRAC_PI_2;

use cgmath::{InnerSpace, Quaternion, Rad, Rotation, Rotation3, Vector3};
use cubemath::Face;
use cubeprefs::{InteractionPreferences, ViewPreferences};
use cubesim::{CubeSimulation, CubieTransform};

/// Distance from the camera to the center of the cube, in cubies.
const CAMERA_DISTANCE: f32 = 10.0;
/// Radius of the region that must fit on screen at zoom 1, in cubies.
const VIEW_RADIUS: f32 = 3.2;
/// Half the size of one cubie.
const CUBIE_HALF_SIZE: f32 = 0.5;

const MIN_ZOOM: f32 = 0.2;
const MAX_ZOOM: f32 = 5.0;

const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x2c, 0x3e, 0x50);
const OUTLINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x11, 0x18, 0x20);
const OUTLINE_WIDTH: f32 = 1.5;

/// Returns the sticker color for a face.
pub(crate) fn face_color(face: Face) -> egui::Color32 {
    match face {
        Face::R => egui::Color32::from_rgb(0xe7, 0x4c, 0x3c),
        Face::L => egui::Color32::from_rgb(0xe6, 0x7e, 0x22),
        Face::U => egui::Color32::from_rgb(0xec, 0xf0, 0xf1),
        Face::D => egui::Color32::from_rgb(0xf1, 0xc4, 0x0f),
        Face::F => egui::Color32::from_rgb(0x2e, 0xcc, 0x71),
        Face::B => egui::Color32::from_rgb(0x34, 0x98, 0xdb),
    }
}

/// Orbit camera looking at the center of the cube.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Camera {
    /// Rotation around the vertical axis, in radians.
    pub yaw: f32,
    /// Rotation around the horizontal axis, in radians.
    pub pitch: f32,
    pub zoom: f32,
}

impl Camera {
    pub fn new(prefs: &ViewPreferences) -> Self {
        Self {
            yaw: prefs.yaw,
            pitch: prefs.pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            zoom: prefs.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Returns the rotation from world space to view space.
    ///
    /// In view space, the camera sits on the +Z axis looking toward the
    /// origin, with +Y up.
    pub fn view_rotation(&self) -> Quaternion<f32> {
        Quaternion::from_angle_x(Rad(self.pitch)) * Quaternion::from_angle_y(Rad(-self.yaw))
    }

    fn rotate(&mut self, delta: egui::Vec2, sensitivity: f32) {
        self.yaw += delta.x * sensitivity;
        self.pitch = (self.pitch + delta.y * sensitivity).clamp(-FRAC_PI_2, FRAC_PI_2);
    }
}

/// One face of one cubie, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FacePolygon {
    /// Sticker on this face, or `None` for a bare face.
    pub sticker: Option<Face>,
    /// Vertices in view space.
    pub vertices: [Vector3<f32>; 4],
    /// View-space Z coordinate of the face center. Larger is nearer.
    pub depth: f32,
}

/// Returns every camera-facing cubie face, sorted back to front.
pub(crate) fn visible_faces(
    render_data: &[CubieTransform],
    camera: &Camera,
    view_prefs: &ViewPreferences,
) -> Vec<FacePolygon> {
    let view = camera.view_rotation();
    let spacing = view_prefs.cubie_spacing();
    let eye = Vector3::new(0.0, 0.0, CAMERA_DISTANCE);

    let mut faces = vec![];
    for cubie in render_data {
        let center = view.rotate_vector(cubie.position * spacing);
        let to_view = |local: Vector3<f32>| {
            center + view.rotate_vector(cubie.orientation.rotate_vector(local))
        };

        for face in Face::iter() {
            let normal = face.normal() * CUBIE_HALF_SIZE;
            let face_center = to_view(normal);
            let view_normal = face_center - center;
            // Back-face culling.
            if view_normal.dot(eye - face_center) <= 0.0 {
                continue;
            }

            let [b, c] = face
                .axis()
                .perpendiculars()
                .map(|axis| axis.unit_vector() * CUBIE_HALF_SIZE);
            let vertices = [b + c, b - c, -b - c, -b + c].map(|offset| to_view(normal + offset));

            faces.push(FacePolygon {
                sticker: face.contains(cubie.initial_position).then_some(face),
                vertices,
                depth: face_center.z,
            });
        }
    }

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

/// Projects a view-space point onto the screen.
fn project(p: Vector3<f32>, rect: egui::Rect, zoom: f32) -> egui::Pos2 {
    let half_size = rect.width().min(rect.height()) / 2.0;
    let focal_length = half_size * zoom * CAMERA_DISTANCE / VIEW_RADIUS;
    let w = (CAMERA_DISTANCE - p.z).max(0.001);
    rect.center() + egui::vec2(p.x, -p.y) * (focal_length / w)
}

/// Draws the cube and handles camera controls. Returns whether the view
/// changed without the simulation changing.
pub(crate) fn show(
    ui: &mut egui::Ui,
    camera: &mut Camera,
    sim: &CubeSimulation,
    view_prefs: &ViewPreferences,
    interaction_prefs: &InteractionPreferences,
    dt: f32,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::drag());

    let mut view_changed = false;
    if response.dragged() {
        camera.rotate(response.drag_delta(), interaction_prefs.drag_sensitivity);
        view_changed = true;
    } else if view_prefs.auto_rotate && !sim.is_busy() {
        camera.yaw += view_prefs.auto_rotate_speed * dt;
        view_changed = true;
    }
    if response.hovered() {
        let scroll = ui.input(|input| input.smooth_scroll_delta.y);
        if scroll != 0.0 {
            camera.zoom = (camera.zoom * (scroll * 0.002).exp()).clamp(MIN_ZOOM, MAX_ZOOM);
            view_changed = true;
        }
    }

    let painter = ui.painter_at(rect);
    let stroke = egui::Stroke::new(OUTLINE_WIDTH, OUTLINE_COLOR);
    for face in visible_faces(&sim.render_data(), camera, view_prefs) {
        let fill = face.sticker.map_or(BODY_COLOR, face_color);
        let points = face.vertices.map(|v| project(v, rect, camera.zoom)).to_vec();
        painter.add(egui::Shape::convex_polygon(points, fill, stroke));
    }

    view_changed
}
