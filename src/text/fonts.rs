use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::text::measure::{FontSpec, GenericFamily};

/// A concrete font face picked for a [`FontSpec`].
#[derive(Clone, Debug)]
pub struct ResolvedFace {
    /// Database id, stable for the lifetime of the library.
    pub id: fontdb::ID,
    /// Family name as reported by the face.
    pub family: String,
    /// Actual CSS weight of the face.
    pub weight: u16,
    /// Raw font file bytes.
    pub data: Arc<Vec<u8>>,
    /// Face index inside `data` (collections).
    pub index: u32,
    /// `true` when the requested family was not available.
    pub fell_back: bool,
}

type QueryKey = (String, GenericFamily, u16);

/// Font faces available to the renderer.
///
/// Faces come from the system and/or explicit files. Lookups go by family name first, then by
/// the requested generic family, then to any loaded face.
pub struct FontLibrary {
    db: fontdb::Database,
    resolved: HashMap<QueryKey, ResolvedFace>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontLibrary")
            .field("faces", &self.db.len())
            .finish()
    }
}

impl FontLibrary {
    /// Empty library.
    pub fn new() -> Self {
        Self {
            db: fontdb::Database::new(),
            resolved: HashMap::new(),
        }
    }

    /// Library populated from the platform's font directories.
    pub fn with_system_fonts() -> Self {
        let mut lib = Self::new();
        lib.load_system_fonts();
        lib
    }

    /// Add the platform's fonts.
    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        self.resolved.clear();
    }

    /// Add a single font file (`.ttf`, `.otf`, `.ttc`).
    pub fn load_font_file(&mut self, path: &Path) -> ThumbResult<()> {
        self.db.load_font_file(path).map_err(|e| {
            ThumbError::font(format!("failed to load font '{}': {e}", path.display()))
        })?;
        self.resolved.clear();
        Ok(())
    }

    /// Add every font file found (recursively) under `dir`.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        self.db.load_fonts_dir(dir);
        self.resolved.clear();
    }

    /// Add a font from memory.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
        self.resolved.clear();
    }

    /// Family used for the generic serif fallback.
    pub fn set_serif_family(&mut self, family: impl Into<String>) {
        self.db.set_serif_family(family);
        self.resolved.clear();
    }

    /// Family used for the generic sans-serif fallback (the badge face).
    pub fn set_sans_serif_family(&mut self, family: impl Into<String>) {
        self.db.set_sans_serif_family(family);
        self.resolved.clear();
    }

    /// Number of loaded faces.
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// `true` when no face is loaded.
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Sorted, de-duplicated family names of all loaded faces.
    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .db
            .faces()
            .filter_map(|f| f.families.first().map(|(name, _)| name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Pick the face for `wanted`.
    pub fn resolve(&mut self, wanted: &FontSpec) -> ThumbResult<ResolvedFace> {
        let key = (wanted.family.to_lowercase(), wanted.generic, wanted.weight.css());
        if let Some(face) = self.resolved.get(&key) {
            return Ok(face.clone());
        }

        let generic = match wanted.generic {
            GenericFamily::Serif => fontdb::Family::Serif,
            GenericFamily::SansSerif => fontdb::Family::SansSerif,
        };
        let mut families = Vec::with_capacity(2);
        if !wanted.family.trim().is_empty() {
            families.push(fontdb::Family::Name(wanted.family.trim()));
        }
        families.push(generic);

        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight(wanted.weight.css()),
            ..fontdb::Query::default()
        };
        let id = self
            .db
            .query(&query)
            .or_else(|| self.any_family(query.weight))
            .ok_or_else(|| ThumbError::font("no font faces loaded"))?;

        let face = self.load_face(id, &wanted.family)?;
        if face.fell_back && !wanted.family.trim().is_empty() {
            tracing::warn!(
                requested = %wanted.family,
                resolved = %face.family,
                "font family unavailable, using fallback"
            );
        }
        self.resolved.insert(key, face.clone());
        Ok(face)
    }

    // Last resort: the best-matching weight of the alphabetically first family.
    fn any_family(&self, weight: fontdb::Weight) -> Option<fontdb::ID> {
        self.family_names().iter().find_map(|name| {
            self.db.query(&fontdb::Query {
                families: &[fontdb::Family::Name(name)],
                weight,
                ..fontdb::Query::default()
            })
        })
    }

    fn load_face(&self, id: fontdb::ID, requested: &str) -> ThumbResult<ResolvedFace> {
        let info = self
            .db
            .face(id)
            .ok_or_else(|| ThumbError::font("resolved face vanished from database"))?;
        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        let weight = info.weight.0;
        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| ThumbError::font(format!("font data for '{family}' is unreadable")))?;

        Ok(ResolvedFace {
            id,
            fell_back: !family.eq_ignore_ascii_case(requested.trim()),
            family,
            weight,
            data: Arc::new(data),
            index,
        })
    }
}
