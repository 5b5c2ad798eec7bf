//! Named resources: the background texture and the two shader sources.
//!
//! Groups are declared in code and loaded entry by entry, in order, from an
//! `AssetSource` supplied by the frontend (filesystem natively, `fetch()` in
//! the browser).

use crate::constants::*;
use fnv::FnvHashMap;
use image::imageops::FilterType;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("resource not found: {url}")]
    NotFound { url: String },
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("resource `{name}` is not valid UTF-8")]
    Utf8 {
        name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("failed to decode image `{name}`")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("resource `{0}` is not loaded")]
    Missing(String),
    #[error("resource `{name}` is not {expected:?}")]
    WrongKind { name: String, expected: ResourceKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Image,
    Text,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceEntry {
    pub name: String,
    pub url: String,
    pub kind: ResourceKind,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }
}

/// Ordered list of entries loaded together.
#[derive(Clone, Debug, Default)]
pub struct ResourceGroup {
    pub name: String,
    pub entries: Vec<ResourceEntry>,
}

impl ResourceGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: ResourceEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// The group loaded before the scene is built: just the background.
    pub fn preload() -> Self {
        Self::new(PRELOAD_GROUP).with_entry(ResourceEntry::new(
            BACKGROUND_KEY,
            BACKGROUND_URL,
            ResourceKind::Image,
        ))
    }
}

/// Byte source for resource urls.
#[allow(async_fn_in_trait)]
pub trait AssetSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError>;
}

/// Receives progress while a group loads (the loading view).
pub trait LoadProgress {
    fn on_progress(&mut self, loaded: usize, total: usize, entry: &ResourceEntry);
}

/// Progress reporter that only logs.
#[derive(Debug, Default)]
pub struct LogProgress;

impl LoadProgress for LogProgress {
    fn on_progress(&mut self, loaded: usize, total: usize, entry: &ResourceEntry) {
        log::info!("[res] {}/{} {} ({})", loaded, total, entry.name, entry.url);
    }
}

/// Decoded RGBA8 image.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl BackgroundImage {
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let img = image::load_from_memory(bytes)
            .map_err(|source| LoadError::Image {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Dusk-blue vertical gradient with a faint horizon, so the drops still
    /// have something to refract.
    pub fn placeholder(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let v = y as f32 / height as f32;
            let horizon = (1.0 - ((v - 0.62).abs() * 12.0)).max(0.0) * 0.35;
            for x in 0..width {
                let u = x as f32 / width as f32;
                let r = 0.10 + 0.25 * v + horizon;
                let g = 0.14 + 0.20 * v + 0.05 * u + horizon * 0.8;
                let b = 0.30 + 0.15 * (1.0 - v) + horizon * 0.5;
                for c in [r, g, b] {
                    rgba.push((c.clamp(0.0, 1.0) * 255.0) as u8);
                }
                rgba.push(255);
            }
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    /// Downscales, keeping the aspect ratio, so neither side exceeds
    /// `max_dim` (the device's `max_texture_dimension_2d`). Images already in
    /// bounds are borrowed unchanged.
    pub fn fit_within(&self, max_dim: u32) -> Cow<'_, BackgroundImage> {
        let max_dim = max_dim.max(1);
        if self.width <= max_dim && self.height <= max_dim {
            return Cow::Borrowed(self);
        }
        let [width, height] = fitted_size([self.width, self.height], max_dim);
        log::warn!(
            "[resources] background {}x{} exceeds texture limit {}, scaling to {}x{}",
            self.width,
            self.height,
            max_dim,
            width,
            height
        );
        let Some(src) = image::RgbaImage::from_raw(self.width, self.height, self.rgba.clone())
        else {
            log::error!("[resources] background pixel buffer is truncated");
            return Cow::Owned(Self::placeholder(width, height));
        };
        let scaled = image::imageops::resize(&src, width, height, FilterType::Triangle);
        Cow::Owned(Self {
            width,
            height,
            rgba: scaled.into_raw(),
        })
    }
}

/// `[width, height]` scaled so the longer side equals `max_dim`; both sides
/// stay at least one pixel.
pub fn fitted_size(size: [u32; 2], max_dim: u32) -> [u32; 2] {
    let [w, h] = size;
    let longest = w.max(h).max(1) as u64;
    let max_dim = max_dim.max(1) as u64;
    if longest <= max_dim {
        return [w.max(1), h.max(1)];
    }
    let scale = |side: u32| {
        let scaled = (side as u64 * max_dim + longest / 2) / longest;
        scaled.clamp(1, max_dim) as u32
    };
    [scale(w), scale(h)]
}

#[derive(Clone, Debug)]
pub enum Resource {
    Image(BackgroundImage),
    Text(String),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Image(_) => ResourceKind::Image,
            Resource::Text(_) => ResourceKind::Text,
        }
    }
}

/// Loaded resources addressed by name.
#[derive(Debug, Default)]
pub struct Resources {
    items: FnvHashMap<String, Resource>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the bundled vertex and fragment shader sources.
    pub fn with_builtin_shaders() -> Self {
        let mut res = Self::new();
        res.insert_text(VERTEX_SHADER_KEY, crate::VERTEX_WGSL);
        res.insert_text(FRAGMENT_SHADER_KEY, crate::FRAGMENT_WGSL);
        res
    }

    pub fn insert_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.items.insert(name.into(), Resource::Text(text.into()));
    }

    pub fn insert_image(&mut self, name: impl Into<String>, image: BackgroundImage) {
        self.items.insert(name.into(), Resource::Image(image));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Result<&Resource, LoadError> {
        self.items
            .get(name)
            .ok_or_else(|| LoadError::Missing(name.to_string()))
    }

    pub fn text(&self, name: &str) -> Result<&str, LoadError> {
        match self.get(name)? {
            Resource::Text(t) => Ok(t),
            Resource::Image(_) => Err(LoadError::WrongKind {
                name: name.to_string(),
                expected: ResourceKind::Text,
            }),
        }
    }

    pub fn image(&self, name: &str) -> Result<&BackgroundImage, LoadError> {
        match self.get(name)? {
            Resource::Image(img) => Ok(img),
            Resource::Text(_) => Err(LoadError::WrongKind {
                name: name.to_string(),
                expected: ResourceKind::Image,
            }),
        }
    }

    /// Loads every entry of `group` in declaration order. Stops at the first
    /// failure; entries loaded before it stay available.
    pub async fn load_group<S, P>(
        &mut self,
        source: &S,
        group: &ResourceGroup,
        progress: &mut P,
    ) -> Result<(), LoadError>
    where
        S: AssetSource,
        P: LoadProgress,
    {
        let total = group.entries.len();
        log::info!("[res] loading group `{}` ({} entries)", group.name, total);
        for (i, entry) in group.entries.iter().enumerate() {
            let bytes = source.fetch(&entry.url).await?;
            let resource = match entry.kind {
                ResourceKind::Image => {
                    Resource::Image(BackgroundImage::decode(&entry.name, &bytes)?)
                }
                ResourceKind::Text => {
                    let text = String::from_utf8(bytes).map_err(|source| LoadError::Utf8 {
                        name: entry.name.clone(),
                        source,
                    })?;
                    Resource::Text(text)
                }
            };
            self.items.insert(entry.name.clone(), resource);
            progress.on_progress(i + 1, total, entry);
        }
        Ok(())
    }

    /// The background image, or the generated placeholder when it is missing.
    pub fn background_or_placeholder(&self) -> BackgroundImage {
        match self.image(BACKGROUND_KEY) {
            Ok(img) => img.clone(),
            Err(e) => {
                log::warn!("[res] {e}; using placeholder background");
                BackgroundImage::placeholder(PLACEHOLDER_SIZE[0], PLACEHOLDER_SIZE[1])
            }
        }
    }
}

/// Joins a resource root and a relative url with exactly one `/`.
pub fn join_url(root: &str, url: &str) -> String {
    let root = root.trim_end_matches('/');
    let url = url.trim_start_matches('/');
    if root.is_empty() {
        url.to_string()
    } else {
        format!("{root}/{url}")
    }
}
