use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geometry::{Point, Triangle};
use crate::surface::Pen;

/// Hard cap on recursion depth. Work grows as O(3^depth); the stock scenes
/// use 4 and 7.
pub const MAX_DEPTH: u32 = 12;

/// Serializable description of the scene to render.
///
/// # Example
/// ```
/// use ft_core::config::SceneConfig;
/// let scene = SceneConfig::default();
/// assert_eq!(scene.triangles.len(), 2);
/// assert!(scene.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Triangles to draw, in order.
    pub triangles: Vec<TriangleSpec>,
    /// Truecolor output; disable for monochrome terminals.
    pub color_enabled: bool,
}

/// One triangle of the scene.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TriangleSpec {
    /// Vertices A, B, C as `[x, y]` pairs. Orientation is up to the author;
    /// it only fixes which borders the subdivision treats as A–B, B–C, C–A.
    pub vertices: [[i32; 2]; 3],
    /// Subdivision depth. 0 draws nothing.
    pub depth: u32,
    /// Glyph the borders are drawn with.
    #[serde(default = "default_glyph")]
    pub glyph: char,
    /// Border color (RGB).
    #[serde(default = "default_color")]
    pub color: [u8; 3],
}

fn default_glyph() -> char {
    '◆'
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

impl TriangleSpec {
    /// The vertex triple as a geometry value.
    #[must_use]
    pub fn triangle(&self) -> Triangle {
        let [a, b, c] = self.vertices;
        Triangle::new(
            Point::new(a[0], a[1]),
            Point::new(b[0], b[1]),
            Point::new(c[0], c[1]),
        )
    }

    /// The drawing pen for this triangle.
    #[must_use]
    pub fn pen(&self) -> Pen {
        Pen::new(self.glyph, (self.color[0], self.color[1], self.color[2]))
    }
}

impl Default for SceneConfig {
    /// Two side-by-side figures, one shallow and one deep.
    fn default() -> Self {
        Self {
            triangles: vec![
                TriangleSpec {
                    vertices: [[65, 2], [0, 67], [130, 67]],
                    depth: 4,
                    glyph: default_glyph(),
                    color: [0, 255, 255],
                },
                TriangleSpec {
                    vertices: [[200, 2], [135, 67], [265, 67]],
                    depth: 7,
                    glyph: default_glyph(),
                    color: [255, 255, 255],
                },
            ],
            color_enabled: true,
        }
    }
}

impl SceneConfig {
    /// Check structural constraints after deserialization.
    ///
    /// # Errors
    /// Returns `CoreError::Config` for an empty scene or an excessive depth.
    pub fn validate(&self) -> std::result::Result<(), CoreError> {
        if self.triangles.is_empty() {
            return Err(CoreError::Config("scene has no triangles".into()));
        }
        for (i, spec) in self.triangles.iter().enumerate() {
            if spec.depth > MAX_DEPTH {
                return Err(CoreError::Config(format!(
                    "triangle {i}: depth {} exceeds maximum {MAX_DEPTH}",
                    spec.depth
                )));
            }
        }
        Ok(())
    }
}

/// Load and validate a scene from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
/// ```no_run
/// use ft_core::config::load_scene;
/// use std::path::Path;
/// let scene = load_scene(Path::new("config/scene.toml")).unwrap();
/// ```
pub fn load_scene(path: &Path) -> Result<SceneConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let scene: SceneConfig = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_two_figures() {
        let scene = SceneConfig::default();
        assert_eq!(scene.triangles.len(), 2);
        assert_eq!(scene.triangles[0].depth, 4);
        assert_eq!(scene.triangles[1].depth, 7);
        assert_eq!(scene.triangles[0].triangle().a, Point::new(65, 2));
        scene.validate().expect("stock scene must validate");
    }

    #[test]
    fn empty_scene_is_rejected() {
        let scene = SceneConfig {
            triangles: vec![],
            color_enabled: true,
        };
        assert!(matches!(scene.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn excessive_depth_is_rejected() {
        let mut scene = SceneConfig::default();
        scene.triangles[0].depth = MAX_DEPTH + 1;
        assert!(matches!(scene.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn missing_file_is_a_core_error() {
        let err = load_scene(Path::new("/nonexistent/scene.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn parses_minimal_toml() {
        let toml_src = r#"
            [[triangles]]
            vertices = [[10, 0], [0, 20], [20, 20]]
            depth = 3
        "#;
        let scene: SceneConfig = toml::from_str(toml_src).expect("parse");
        assert_eq!(scene.triangles.len(), 1);
        assert_eq!(scene.triangles[0].glyph, '◆');
        assert_eq!(scene.triangles[0].color, [255, 255, 255]);
        assert!(scene.color_enabled);
        scene.validate().expect("valid");
    }
}
