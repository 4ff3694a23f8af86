#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use flexi_logger::Logger;
use log::info;

use dependencies::{Dependency, Singleton, SingletonFor};
use dirs::Dirs;
use modal::ModalManager;
use scene::{home_scene::HomeScene, SceneManager};

mod catalog;
mod collage;
mod config;
mod dependencies;
mod dirs;
mod export;
mod gallery_service;
mod layout;
mod media_library;
mod modal;
mod photo;
mod rasterize;
mod scene;
mod theme;
mod utils;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    Dirs::initialize_dirs()?;
    info!("Starting collage studio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Collage Studio")
            .with_inner_size(egui::vec2(480.0, 900.0))
            .with_min_inner_size(egui::vec2(360.0, 640.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Collage Studio",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CollageApp::new()))
        }),
    )
    .map_err(|err| anyhow::anyhow!("Error running native app: {}", err))
}

struct CollageApp {
    scenes: SceneManager,
}

impl CollageApp {
    fn new() -> Self {
        Self {
            scenes: SceneManager::new(Box::new(HomeScene::new())),
        }
    }
}

impl eframe::App for CollageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.scenes.ui(ui);

            let modal_manager: Singleton<ModalManager> = Dependency::get();
            modal_manager.with_lock_mut(|manager| manager.show_next(ui));
        });
    }
}
