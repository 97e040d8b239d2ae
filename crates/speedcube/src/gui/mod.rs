use std::path::PathBuf;

use cubemath::Face;
use cubeprefs::{InterpolateFn, Preferences};
use cubesim::{CubeSimulation, Move};
use strum::VariantArray;

mod cube_view;

use cube_view::Camera;

pub struct AppUi {
    sim: CubeSimulation,
    camera: Camera,

    prefs: Preferences,
    prefs_path: Option<PathBuf>,
    prefs_need_save: bool,
}

impl AppUi {
    pub(crate) fn new(prefs: Preferences, prefs_path: Option<PathBuf>) -> Self {
        AppUi {
            sim: CubeSimulation::new(&prefs),
            camera: Camera::new(&prefs.view),

            prefs,
            prefs_path,
            prefs_need_save: false,
        }
    }

    pub fn build(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|input| input.stable_dt);

        if !ctx.wants_keyboard_input() {
            for m in self.moves_from_keyboard(ctx) {
                self.sim.request_move(m);
            }
        }

        let mut needs_redraw = self.sim.tick(dt);

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| self.show_controls(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(ctx.style().visuals.extreme_bg_color))
            .show(ctx, |ui| {
                needs_redraw |= cube_view::show(
                    ui,
                    &mut self.camera,
                    &self.sim,
                    &self.prefs.view,
                    &self.prefs.interaction,
                    dt,
                );
            });

        if needs_redraw || self.sim.is_busy() {
            ctx.request_repaint();
        }
    }

    /// Returns the moves requested by key presses this frame.
    fn moves_from_keyboard(&self, ctx: &egui::Context) -> Vec<Move> {
        let ignore_repeat = self.prefs.interaction.ignore_key_repeat;
        ctx.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat,
                        modifiers,
                        ..
                    } if !(*repeat && ignore_repeat) => {
                        Move::from_key(key_char(*key)?, modifiers.shift)
                    }
                    _ => None,
                })
                .collect()
        })
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Moves");
        egui::Grid::new("move_buttons").show(ui, |ui| {
            for face in Face::iter() {
                for prime in [false, true] {
                    let m = Move::new(face, prime);
                    if ui.button(m.name()).clicked() {
                        self.sim.request_move(m);
                    }
                }
                ui.end_row();
            }
        });

        ui.separator();
        let idle = !self.sim.is_busy();
        ui.horizontal(|ui| {
            if ui.add_enabled(idle, egui::Button::new("Scramble")).clicked() {
                self.sim.scramble();
            }
            if ui.add_enabled(idle, egui::Button::new("Reset")).clicked() {
                self.sim.reset();
            }
        });

        ui.separator();
        let current = self.sim.current_move().map_or("-".to_owned(), |m| m.to_string());
        ui.label(format!("Twisting: {current}"));
        ui.label(format!("Queued: {}", self.sim.queued_moves().count()));
        ui.label(format!("Moves made: {}", self.sim.history().len()));
        ui.label("Keys: R L U D F B, hold Shift for prime");

        ui.separator();
        self.show_prefs(ui);
    }

    fn show_prefs(&mut self, ui: &mut egui::Ui) {
        let mut changed = false;

        ui.collapsing("Animation", |ui| {
            let anim = &mut self.prefs.animation;
            changed |= ui
                .add(
                    egui::Slider::new(&mut anim.twist_duration, 0.0..=2.0)
                        .text("Twist duration")
                        .suffix(" s"),
                )
                .changed();
            egui::ComboBox::from_label("Easing")
                .selected_text(anim.twist_interpolation.name())
                .show_ui(ui, |ui| {
                    for &f in InterpolateFn::VARIANTS {
                        changed |= ui
                            .selectable_value(&mut anim.twist_interpolation, f, f.name())
                            .changed();
                    }
                });
            changed |= ui
                .checkbox(&mut anim.dynamic_twist_speed, "Dynamic twist speed")
                .changed();
        });

        ui.collapsing("Scramble", |ui| {
            changed |= ui
                .add(egui::Slider::new(&mut self.prefs.scramble.length, 1..=100).text("Length"))
                .changed();
        });

        ui.collapsing("View", |ui| {
            let view = &mut self.prefs.view;
            changed |= ui
                .add(egui::Slider::new(&mut view.cubie_gap, 0.0..=0.3).text("Cubie gap"))
                .changed();
            changed |= ui.checkbox(&mut view.auto_rotate, "Auto-rotate").changed();
            changed |= ui
                .add(egui::Slider::new(&mut view.auto_rotate_speed, 0.0..=3.0).text("Speed"))
                .changed();
            changed |= ui
                .checkbox(&mut self.prefs.interaction.ignore_key_repeat, "Ignore key repeat")
                .changed();
            if ui.button("Reset camera").clicked() {
                self.camera = Camera::new(view);
            }
        });

        if changed {
            self.sim.set_animation_prefs(self.prefs.animation.clone());
            self.sim.set_scramble_prefs(self.prefs.scramble.clone());
            self.prefs_need_save = true;
        }
    }

    /// Saves preferences if they have changed since the last save.
    pub(crate) fn save_prefs_if_needed(&mut self) {
        if !self.prefs_need_save {
            return;
        }
        let Some(path) = &self.prefs_path else {
            return;
        };
        match self.prefs.save(path) {
            Ok(()) => self.prefs_need_save = false,
            Err(e) => log::error!("Error saving preferences: {e}"),
        }
    }
}

/// Returns the notation letter for a key, if it has one.
fn key_char(key: egui::Key) -> Option<char> {
    match key {
        egui::Key::R => Some('R'),
        egui::Key::L => Some('L'),
        egui::Key::U => Some('U'),
        egui::Key::D => Some('D'),
        egui::Key::F => Some('F'),
        egui::Key::B => Some('B'),
        _ => None,
    }
}
