// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use trip_manager::{
    config::{
        options::{AppOptions, ProjectPaths},
        state::GuiState,
    },
    gui,
};
use eframe::egui::{ IconData, ViewportBuilder };
use image::{Rgba, RgbaImage};

/// 64×64 mountain on a sky disc, drawn in code (no bundled asset).
fn app_icon() -> IconData {
    const N: u32 = 64;
    let sky = Rgba([0x2E, 0x7D, 0xB8, 0xFF]);
    let rock = Rgba([0x3B, 0x4A, 0x3F, 0xFF]);
    let snow = Rgba([0xF5, 0xF7, 0xFA, 0xFF]);
    let clear = Rgba([0, 0, 0, 0]);

    let c = (N as f32 - 1.0) / 2.0;
    let img = RgbaImage::from_fn(N, N, |x, y| {
        let (fx, fy) = (x as f32, y as f32);
        if (fx - c).powi(2) + (fy - c).powi(2) > c * c {
            return clear;
        }
        // peak at (32, 14), base on y = 50
        let half_width = (fy - 14.0) * 0.9;
        if fy >= 14.0 && fy <= 50.0 && (fx - 32.0).abs() <= half_width {
            if fy < 24.0 { snow } else { rock }
        } else {
            sky
        }
    });

    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let project = ProjectPaths::discover(&cwd);
    trip_manager::log::init(project.root());

    let app_options = AppOptions::for_root(project.root());

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_min_inner_size([900.0, 600.0])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
