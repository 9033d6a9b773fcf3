//! Typography tokens
//!
//! Type is described abstractly: a [`TypeStyle`] names a role in the type
//! ramp, and [`TypeStyle::spec`] materializes it against the configured
//! [`FontFamily`] into a [`FontSpec`] the rendering layer can turn into an
//! actual font object.

/// A font family choice: the platform default or a named custom face
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum FontChoice {
    System,
    Custom(String),
}

/// Configured families for proportional and monospaced text
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct FontFamily {
    pub sans: FontChoice,
    pub mono: FontChoice,
}

impl FontFamily {
    /// Platform default faces for both families
    pub fn system() -> Self {
        Self {
            sans: FontChoice::System,
            mono: FontChoice::System,
        }
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::system()
    }
}

/// Font weight, a subset of the platform weight axis
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Semantic roles in the type ramp
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypeStyle {
    Display,
    Title1,
    Title2,
    Body,
    Subbody,
    Caption,
    Mono,
}

/// A concrete font request: family name (`None` = platform default), size in
/// points, weight, and whether a monospaced face is required
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: Option<String>,
    pub size: f32,
    pub weight: FontWeight,
    pub monospaced: bool,
}

impl TypeStyle {
    /// Every role, for iteration
    pub const ALL: [TypeStyle; 7] = [
        TypeStyle::Display,
        TypeStyle::Title1,
        TypeStyle::Title2,
        TypeStyle::Body,
        TypeStyle::Subbody,
        TypeStyle::Caption,
        TypeStyle::Mono,
    ];

    /// Point size for this role
    pub fn size(self) -> f32 {
        match self {
            TypeStyle::Display => 34.0,
            TypeStyle::Title1 => 28.0,
            TypeStyle::Title2 => 22.0,
            TypeStyle::Body => 17.0,
            TypeStyle::Subbody => 15.0,
            TypeStyle::Caption => 13.0,
            TypeStyle::Mono => 15.0,
        }
    }

    /// Default weight for this role
    pub fn default_weight(self) -> FontWeight {
        match self {
            TypeStyle::Display => FontWeight::Bold,
            TypeStyle::Title1 | TypeStyle::Title2 => FontWeight::Semibold,
            TypeStyle::Body | TypeStyle::Subbody | TypeStyle::Caption | TypeStyle::Mono => {
                FontWeight::Regular
            }
        }
    }

    pub fn is_monospaced(self) -> bool {
        matches!(self, TypeStyle::Mono)
    }

    /// Materialize this role against the configured families
    pub fn spec(self, family: &FontFamily) -> FontSpec {
        self.spec_with_weight(family, self.default_weight())
    }

    /// Materialize with an explicit weight override
    pub fn spec_with_weight(self, family: &FontFamily, weight: FontWeight) -> FontSpec {
        let choice = if self.is_monospaced() {
            &family.mono
        } else {
            &family.sans
        };
        FontSpec {
            family: match choice {
                FontChoice::System => None,
                FontChoice::Custom(name) => Some(name.clone()),
            },
            size: self.size(),
            weight,
            monospaced: self.is_monospaced(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_sizes_and_weights() {
        let family = FontFamily::system();
        let display = TypeStyle::Display.spec(&family);
        assert_eq!(display.size, 34.0);
        assert_eq!(display.weight, FontWeight::Bold);

        let body = TypeStyle::Body.spec(&family);
        assert_eq!(body.size, 17.0);
        assert_eq!(body.weight, FontWeight::Regular);
        assert_eq!(body.family, None);
    }

    #[test]
    fn test_mono_role_requests_monospaced_face() {
        let family = FontFamily {
            sans: FontChoice::Custom("Inter".to_string()),
            mono: FontChoice::Custom("JetBrains Mono".to_string()),
        };
        let mono = TypeStyle::Mono.spec(&family);
        assert!(mono.monospaced);
        assert_eq!(mono.family.as_deref(), Some("JetBrains Mono"));

        let body = TypeStyle::Body.spec(&family);
        assert!(!body.monospaced);
        assert_eq!(body.family.as_deref(), Some("Inter"));
    }

    #[test]
    fn test_weight_override() {
        let family = FontFamily::system();
        let heavy_body = TypeStyle::Body.spec_with_weight(&family, FontWeight::Semibold);
        assert_eq!(heavy_body.weight, FontWeight::Semibold);
        assert_eq!(heavy_body.size, TypeStyle::Body.size());
    }
}
