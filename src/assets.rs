use crate::prelude::*;

pub struct Assets {
    pub textures: Textures,
}

/// Every texture the config refers to, keyed by its path inside the assets directory.
pub struct Textures {
    textures: HashMap<Rc<str>, Rc<ugli::Texture>>,
}

impl Assets {
    pub async fn load(manager: &geng::asset::Manager, config: &Config) -> anyhow::Result<Self> {
        let textures =
            Textures::load(manager, &run_dir().join("assets"), config.texture_paths()).await;
        Ok(Self { textures })
    }
}

impl Textures {
    /// Textures that fail to load are skipped, and their sprites are not drawn.
    pub async fn load<'a>(
        manager: &geng::asset::Manager,
        dir: &std::path::Path,
        paths: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut textures = HashMap::new();
        for path in paths {
            if textures.contains_key(path) {
                continue;
            }
            let texture: anyhow::Result<ugli::Texture> =
                <ugli::Texture as geng::asset::Load>::load(
                    manager,
                    &dir.join(path),
                    &Default::default(),
                )
                .await;
            match texture {
                Ok(mut texture) => {
                    texture.set_filter(ugli::Filter::Nearest);
                    textures.insert(Rc::from(path), Rc::new(texture));
                }
                Err(err) => {
                    log::warn!("Failed to load texture {:?}: {:?}", path, err);
                }
            }
        }
        log::info!("Loaded {} textures", textures.len());
        Self { textures }
    }

    pub fn get(&self, bitmap: &Bitmap) -> Option<&ugli::Texture> {
        self.textures.get(&bitmap.path).map(|texture| &**texture)
    }
}

impl BitmapLoader for Textures {
    fn bitmap(&self, path: &str) -> Bitmap {
        match self.textures.get(path) {
            Some(texture) => Bitmap::new(path, texture.size()),
            None => Bitmap::unloaded(path),
        }
    }
}
