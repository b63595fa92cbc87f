use std::path::Path;

/// Files written per image. The first three are always produced; the rest
/// only in debug mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Mask,
    Dilated,
    Imperfection,
    Grayscale,
    Threshold,
}

impl ArtifactKind {
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Mask => "mask",
            ArtifactKind::Dilated => "dilated",
            ArtifactKind::Imperfection => "imperfection",
            ArtifactKind::Grayscale => "grayscale",
            ArtifactKind::Threshold => "threshold",
        }
    }
}

const STRIPPED_SUFFIXES: [&str; 2] = [".png", ".jpg"];

/// Final path component of `filename` with one literal `.png` or `.jpg`
/// removed from the end. Case-sensitive.
pub fn output_basename(filename: &str) -> &str {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    STRIPPED_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}

pub fn artifact_file_name(filename: &str, kind: ArtifactKind, extension: &str) -> String {
    format!("{}_{}.{}", output_basename(filename), kind.suffix(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_suffixes_are_stripped() {
        assert_eq!(output_basename("img1.png"), "img1");
        assert_eq!(output_basename("scan.jpg"), "scan");
        assert_eq!(output_basename("photo.jpeg"), "photo.jpeg");
        assert_eq!(output_basename("plain"), "plain");
    }

    #[test]
    fn suffix_match_is_literal() {
        assert_eq!(output_basename("IMG.PNG"), "IMG.PNG");
        assert_eq!(output_basename("double.png.png"), "double.png");
        assert_eq!(output_basename("a.jpg.png"), "a.jpg");
    }

    #[test]
    fn directories_are_dropped() {
        assert_eq!(output_basename("batch/7/part.png"), "part");
    }

    #[test]
    fn artifact_names() {
        assert_eq!(artifact_file_name("img2.png", ArtifactKind::Mask, "png"), "img2_mask.png");
        assert_eq!(artifact_file_name("img2.png", ArtifactKind::Dilated, "png"), "img2_dilated.png");
        assert_eq!(
            artifact_file_name("img2.png", ArtifactKind::Imperfection, "png"),
            "img2_imperfection.png"
        );
    }
}
