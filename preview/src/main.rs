//! Desktop preview app for the ramp animations
//!
//! Draws both ramp strips side by side and drives the full control loop,
//! sensor included, from a simulated flail sensor.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use embedded_hal::digital::{ErrorType, InputPin};
use rand::{SeedableRng, rngs::SmallRng};
use ramp_light_composer::{
    AnimationId, FrameScheduler, Instant, OutputDriver, RampConfig, Rgb, Strip,
};

/// Maximum number of LEDs the renderer supports
const MAX_LEDS: usize = 120;

/// Default number of LEDs on each simulated strip
const DEFAULT_STRIP_LEN: u8 = 30;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Gap between the two strips
const STRIP_GAP: f32 = 48.0;

/// Animations a locked sensor state may select
const SELECTABLE: [AnimationId; 7] = [
    AnimationId::Chase,
    AnimationId::OffsetChase,
    AnimationId::Glow,
    AnimationId::Cross,
    AnimationId::Zippy,
    AnimationId::ZippyCross,
    AnimationId::Decay,
];

/// Flail sensor wired to the UI, active low like the default config
#[derive(Default)]
struct SimulatedPin {
    high: bool,
}

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl InputPin for SimulatedPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

/// Keeps the last flushed frame for drawing
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

type PreviewScheduler = FrameScheduler<PreviewOutput, SimulatedPin, SmallRng, MAX_LEDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 640.0])
            .with_title("Ramp Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ramp-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: Option<PreviewScheduler>,
    /// Last configuration error, shown instead of the strips
    error: Option<String>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,

    strip_len: u8,
    open_animation: AnimationId,
    closed_animation: AnimationId,
    /// Whether a flail sits on the ramp
    flail_present: bool,
    /// Toggle the sensor on its own to simulate a spinning flail
    flailing: bool,
    /// Half period of the simulated flailing
    flail_period_ms: u64,
    /// LED pixel size for display
    led_size: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let mut app = Self {
            scheduler: None,
            error: None,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            strip_len: DEFAULT_STRIP_LEN,
            open_animation: RampConfig::DEFAULT.open_animation,
            closed_animation: RampConfig::DEFAULT.closed_animation,
            flail_present: false,
            flailing: false,
            flail_period_ms: 100,
            led_size: LED_SIZE,
        };
        app.rebuild();
        app
    }

    /// Create a fresh scheduler from the current settings
    fn rebuild(&mut self) {
        let config = RampConfig {
            strip_len: self.strip_len,
            open_animation: self.open_animation,
            closed_animation: self.closed_animation,
            ..RampConfig::DEFAULT
        };
        let pin = SimulatedPin {
            high: self.pin_level(),
        };
        let seed = self.t_ms;
        match FrameScheduler::new(
            &config,
            PreviewOutput::default(),
            pin,
            SmallRng::seed_from_u64(seed),
        ) {
            Ok(scheduler) => {
                self.scheduler = Some(scheduler);
                self.error = None;
            }
            Err(err) => {
                self.scheduler = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Level the sensor reports at the current synthetic time
    fn pin_level(&self) -> bool {
        let present = if self.flailing {
            (self.t_ms / self.flail_period_ms.max(1)) % 2 == 1
        } else {
            self.flail_present
        };
        !present
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.rebuild();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Feed the simulated sensor and run one control loop step
    fn step(&mut self) {
        let level = self.pin_level();
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.sensor_mut().pin_mut().high = level;
            scheduler.tick(Instant::from_millis(self.t_ms));
        }
    }

    fn animation_selector(ui: &mut egui::Ui, id: &str, selected: &mut AnimationId) -> bool {
        let before = *selected;
        egui::ComboBox::from_id_salt(id)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for animation in SELECTABLE {
                    ui.selectable_value(selected, animation, animation.as_str());
                }
            });
        *selected != before
    }

    fn draw_ramp(&self, ui: &mut egui::Ui, scheduler: &PreviewScheduler) {
        let layout = scheduler.renderer().layout();
        let frame = &scheduler.output().frame;
        let led_pitch = self.led_size + LED_GAP;

        #[allow(clippy::cast_precision_loss)]
        let height = layout.strip_len() as f32 * led_pitch;
        let width = 2.0 * led_pitch + STRIP_GAP;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
        let origin = response.rect.min;

        for (column, strip) in [Strip::Left, Strip::Right].into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = origin.x + column as f32 * (led_pitch + STRIP_GAP);
            for pos in 0..layout.strip_len() {
                let Some(pixel) = layout.index_of(strip, pos).and_then(|index| frame.get(index))
                else {
                    continue;
                };
                // Ramp entry at the bottom
                #[allow(clippy::cast_precision_loss)]
                let y = origin.y + (layout.strip_len() - 1 - pos) as f32 * led_pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        if self.playing {
            self.step();
        }

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });

                    ui.horizontal(|ui| {
                        ui.label("Size:");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=24.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <RampControls>
                ui.vertical(|ui| {
                    let mut changed = false;
                    ui.horizontal(|ui| {
                        ui.label("Strip LEDs:");
                        #[allow(clippy::cast_possible_truncation)]
                        let max_strip_len = (MAX_LEDS / 2) as u8;
                        changed |= ui
                            .add(egui::Slider::new(&mut self.strip_len, 1..=max_strip_len))
                            .changed();
                    });
                    ui.horizontal(|ui| {
                        ui.label("Open:");
                        changed |=
                            Self::animation_selector(ui, "open_animation", &mut self.open_animation);
                        ui.label("Closed:");
                        changed |= Self::animation_selector(
                            ui,
                            "closed_animation",
                            &mut self.closed_animation,
                        );
                    });
                    if changed {
                        self.rebuild();
                    }

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.flail_present, "Flail present");
                        ui.checkbox(&mut self.flailing, "Flailing");
                        ui.add(
                            egui::DragValue::new(&mut self.flail_period_ms)
                                .range(20..=1000)
                                .suffix(" ms"),
                        );
                    });
                });
                // </RampControls>
            });

            ui.add_space(16.0);

            match (&self.scheduler, &self.error) {
                (Some(scheduler), _) => {
                    let selector = scheduler.selector();
                    ui.label(format!(
                        "Animation: {}   sensor: {:?}   instability: {:.1}   flips: {}",
                        scheduler.renderer().animation_id().as_str(),
                        selector.locked(),
                        selector.instability(),
                        selector.flips(),
                    ));
                    ui.add_space(8.0);
                    self.draw_ramp(ui, scheduler);
                }
                (None, Some(error)) => {
                    ui.colored_label(egui::Color32::RED, error);
                }
                (None, None) => {}
            }
        });
    }
}
