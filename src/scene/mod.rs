use egui::Ui;

pub mod collage_scene;
pub mod create_scene;
pub mod edits_scene;
pub mod home_scene;
pub mod template_preview_scene;

pub enum SceneResponse {
    None,
    Push(Box<dyn Scene>),
    Pop,
}

pub trait Scene {
    fn ui(&mut self, ui: &mut Ui) -> SceneResponse;
}

/// Stack-based navigation between the app screens. The root scene can never
/// be popped.
pub struct SceneManager {
    scenes: Vec<Box<dyn Scene>>,
}

impl SceneManager {
    pub fn new(root: Box<dyn Scene>) -> Self {
        Self { scenes: vec![root] }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let response = match self.scenes.last_mut() {
            Some(scene) => scene.ui(ui),
            None => SceneResponse::None,
        };

        match response {
            SceneResponse::None => {}
            SceneResponse::Push(scene) => {
                self.scenes.push(scene);
            }
            SceneResponse::Pop => {
                if self.scenes.len() > 1 {
                    self.scenes.pop();
                }
            }
        }
    }
}
