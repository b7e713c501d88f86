//! Embedded assets written next to the page with content-hash filenames.

use super::TemplateVars;
use crate::utils::hash;
use std::{
    fs, io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    JavaScript,
    Css,
}

impl AssetKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::Css => "css",
        }
    }
}

/// A compiled-in asset whose content may depend on `V`.
///
/// The filename is `{stem}.{fingerprint}.{ext}`; the fingerprint covers the
/// raw content and the variables, so any change yields a new URL.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset<V> {
    kind: AssetKind,
    stem: &'static str,
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> EmbeddedAsset<V> {
    pub const fn new(kind: AssetKind, stem: &'static str, content: &'static str) -> Self {
        Self {
            kind,
            stem,
            content,
            _marker: PhantomData,
        }
    }

    pub const fn kind(&self) -> AssetKind {
        self.kind
    }
}

impl<V: TemplateVars> EmbeddedAsset<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }

    pub fn filename_with_vars(&self, vars: &V) -> String {
        let fingerprint = hash::fingerprint(&format!("{}{}", self.content, vars.hash_input()));
        format!("{}.{}.{}", self.stem, fingerprint, self.kind.extension())
    }

    /// URL path under `prefix` (`""` or `/sub/dir`).
    pub fn url_path_with_vars(&self, vars: &V, prefix: &str) -> String {
        format!("{prefix}/{}", self.filename_with_vars(vars))
    }

    /// `<script>` or `<link>` tag referencing the asset.
    pub fn external_tag_with_vars(&self, vars: &V, prefix: &str) -> String {
        let url = self.url_path_with_vars(vars, prefix);
        match self.kind {
            AssetKind::JavaScript => format!(r#"<script src="{url}" defer></script>"#),
            AssetKind::Css => format!(r#"<link rel="stylesheet" href="{url}">"#),
        }
    }

    /// Write the rendered asset into `dir`, returning its path.
    pub fn write_to(&self, dir: &Path, vars: &V) -> io::Result<PathBuf> {
        let path = dir.join(self.filename_with_vars(vars));
        fs::write(&path, self.render(vars))?;
        Ok(path)
    }
}
