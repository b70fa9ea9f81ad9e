// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for project images.
//!
//! Images are decoded on background threads the first time they are shown.
//! Failed loads are remembered so the placeholder is used instead of
//! retrying every frame.

use crate::io::media::{self, ImageLoadResult};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Load state of one image URL.
pub enum ImageSlot {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

/// Cache of decoded image textures keyed by media URL.
pub struct TextureCache {
    slots: HashMap<String, ImageSlot>,
    base_dir: Option<PathBuf>,
    /// Bumped whenever `base_dir` changes
    generation: u64,
    sender: Sender<ImageLoadResult>,
    receiver: Receiver<ImageLoadResult>,
    placeholder: Option<egui::TextureHandle>,
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureCache {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            slots: HashMap::new(),
            base_dir: None,
            generation: 0,
            sender,
            receiver,
            placeholder: None,
        }
    }

    /// Set the directory relative image paths resolve against.
    ///
    /// Drops every cached texture since the same URL may now name a
    /// different file. Loads still running for the old directory are
    /// discarded when they report.
    pub fn set_base_dir(&mut self, base_dir: Option<PathBuf>) {
        self.base_dir = base_dir;
        self.generation += 1;
        self.slots.clear();
    }

    /// Whether a finished load was requested under the current base dir.
    fn is_current(&self, loaded: &ImageLoadResult) -> bool {
        loaded.generation == self.generation
    }

    /// Slot for `url`, starting a background load on first request.
    pub fn get(&mut self, url: &str) -> &ImageSlot {
        if !self.slots.contains_key(url) {
            media::spawn_image_load(
                url.to_string(),
                self.generation,
                self.base_dir.clone(),
                self.sender.clone(),
            );
            self.slots.insert(url.to_string(), ImageSlot::Loading);
        }
        &self.slots[url]
    }

    /// Upload finished loads as textures.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok(loaded) = self.receiver.try_recv() {
            if !self.is_current(&loaded) {
                log::debug!("Discarding image from a previous content directory: {}", loaded.url);
                continue;
            }
            let Some(slot) = self.slots.get_mut(&loaded.url) else {
                continue;
            };

            *slot = match loaded.result {
                Ok(image) => {
                    let size = [image.width as usize, image.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
                    let texture = ctx.load_texture(
                        format!("media:{}", loaded.url),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    ImageSlot::Ready {
                        texture,
                        size: (image.width, image.height),
                    }
                }
                Err(e) => {
                    log::debug!("Using placeholder for {}: {}", loaded.url, e);
                    ImageSlot::Failed
                }
            };
        }
    }

    /// Whether any image is still decoding.
    pub fn is_loading(&self) -> bool {
        self.slots.values().any(|slot| matches!(slot, ImageSlot::Loading))
    }

    /// Fixed texture shown in place of images that fail to load.
    pub fn placeholder(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        self.placeholder
            .get_or_insert_with(|| {
                ctx.load_texture(
                    "image_placeholder",
                    placeholder_image(),
                    egui::TextureOptions::NEAREST,
                )
            })
            .clone()
    }
}

/// Grey checkerboard at 4:3.
fn placeholder_image() -> egui::ColorImage {
    const WIDTH: usize = 64;
    const HEIGHT: usize = 48;
    const CELL: usize = 8;

    let mut image = egui::ColorImage::new([WIDTH, HEIGHT], egui::Color32::from_gray(70));
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if (x / CELL + y / CELL) % 2 == 0 {
                image.pixels[y * WIDTH + x] = egui::Color32::from_gray(90);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_load(url: &str, generation: u64) -> ImageLoadResult {
        ImageLoadResult {
            url: url.to_string(),
            generation,
            result: Err("missing".to_string()),
        }
    }

    #[test]
    fn test_set_base_dir_starts_new_generation() {
        let mut cache = TextureCache::new();
        assert!(cache.is_current(&failed_load("a.png", 0)));

        cache.set_base_dir(Some(PathBuf::from("/srv/other")));
        assert!(!cache.is_current(&failed_load("a.png", 0)));
        assert!(cache.is_current(&failed_load("a.png", 1)));
    }

    #[test]
    fn test_poll_ignores_loads_from_previous_base_dir() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new();
        cache.set_base_dir(Some(PathBuf::from("/srv/new")));
        cache.slots.insert("a.png".to_string(), ImageSlot::Loading);

        // Decode requested before the directory changed
        cache.sender.send(failed_load("a.png", 0)).unwrap();
        cache.poll(&ctx);
        assert!(matches!(cache.slots["a.png"], ImageSlot::Loading));
        assert!(cache.is_loading());

        cache.sender.send(failed_load("a.png", 1)).unwrap();
        cache.poll(&ctx);
        assert!(matches!(cache.slots["a.png"], ImageSlot::Failed));
        assert!(!cache.is_loading());
    }
}
