//! Utility-class bundles. Every lookup is an exhaustive match, so an unknown
//! variant is a compile error rather than a silent fallthrough.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Purple,
    Red,
    Amber,
    Emerald,
    Indigo,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentClasses {
    pub bg_light: &'static str,
    pub bg_soft: &'static str,
    pub bg_solid: &'static str,
    pub hover_bg: &'static str,
    pub text: &'static str,
    pub text_strong: &'static str,
    pub border: &'static str,
    pub border_active: &'static str,
}

impl Accent {
    pub fn classes(self) -> AccentClasses {
        match self {
            Accent::Primary => AccentClasses {
                bg_light: "bg-primary-50",
                bg_soft: "bg-primary-100",
                bg_solid: "bg-primary-500",
                hover_bg: "hover:bg-primary-50/50",
                text: "text-primary-600",
                text_strong: "text-primary-700",
                border: "border-primary-200",
                border_active: "border-primary-500",
            },
            Accent::Secondary => AccentClasses {
                bg_light: "bg-secondary-50",
                bg_soft: "bg-secondary-100",
                bg_solid: "bg-secondary-500",
                hover_bg: "hover:bg-secondary-50/50",
                text: "text-secondary-600",
                text_strong: "text-secondary-700",
                border: "border-secondary-200",
                border_active: "border-secondary-500",
            },
            Accent::Purple => AccentClasses {
                bg_light: "bg-purple-50",
                bg_soft: "bg-purple-100",
                bg_solid: "bg-purple-500",
                hover_bg: "hover:bg-purple-50/50",
                text: "text-purple-600",
                text_strong: "text-purple-700",
                border: "border-purple-200",
                border_active: "border-purple-500",
            },
            Accent::Red => AccentClasses {
                bg_light: "bg-red-50",
                bg_soft: "bg-red-100",
                bg_solid: "bg-red-500",
                hover_bg: "hover:bg-red-50/50",
                text: "text-red-600",
                text_strong: "text-red-700",
                border: "border-red-200",
                border_active: "border-red-500",
            },
            Accent::Amber => AccentClasses {
                bg_light: "bg-amber-50",
                bg_soft: "bg-amber-100",
                bg_solid: "bg-amber-500",
                hover_bg: "hover:bg-amber-50/50",
                text: "text-amber-600",
                text_strong: "text-amber-700",
                border: "border-amber-200",
                border_active: "border-amber-500",
            },
            Accent::Emerald => AccentClasses {
                bg_light: "bg-emerald-50",
                bg_soft: "bg-emerald-100",
                bg_solid: "bg-emerald-500",
                hover_bg: "hover:bg-emerald-50/50",
                text: "text-emerald-600",
                text_strong: "text-emerald-700",
                border: "border-emerald-200",
                border_active: "border-emerald-500",
            },
            Accent::Indigo => AccentClasses {
                bg_light: "bg-indigo-50",
                bg_soft: "bg-indigo-100",
                bg_solid: "bg-indigo-500",
                hover_bg: "hover:bg-indigo-50/50",
                text: "text-indigo-600",
                text_strong: "text-indigo-700",
                border: "border-indigo-200",
                border_active: "border-indigo-500",
            },
            Accent::Slate => AccentClasses {
                bg_light: "bg-slate-50",
                bg_soft: "bg-slate-100",
                bg_solid: "bg-slate-500",
                hover_bg: "hover:bg-slate-50/50",
                text: "text-slate-600",
                text_strong: "text-slate-700",
                border: "border-slate-200",
                border_active: "border-slate-500",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Danger,
    Success,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 focus:ring-blue-300 text-white",
            ButtonVariant::Secondary => {
                "bg-white hover:bg-slate-50 focus:ring-slate-300 text-slate-800 border border-slate-200"
            }
            ButtonVariant::Outline => {
                "bg-transparent hover:bg-blue-50 border border-blue-500 text-blue-600 hover:text-blue-700"
            }
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 focus:ring-red-300 text-white",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700 focus:ring-green-300 text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Small => "py-1 px-3 text-sm",
            ButtonSize::Medium => "py-2 px-4 text-base",
            ButtonSize::Large => "py-3 px-6 text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elevation {
    None,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl Elevation {
    pub fn classes(self) -> &'static str {
        match self {
            Elevation::None => "",
            Elevation::Small => "shadow-sm",
            Elevation::Medium => "shadow",
            Elevation::Large => "shadow-md",
            Elevation::ExtraLarge => "shadow-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    None,
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl Padding {
    pub fn classes(self) -> &'static str {
        match self {
            Padding::None => "p-0",
            Padding::Small => "p-3",
            Padding::Medium => "p-5",
            Padding::Large => "p-6",
            Padding::ExtraLarge => "p-8",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounded {
    None,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    Full,
}

impl Rounded {
    pub fn classes(self) -> &'static str {
        match self {
            Rounded::None => "rounded-none",
            Rounded::Small => "rounded-sm",
            Rounded::Medium => "rounded-md",
            Rounded::Large => "rounded-lg",
            Rounded::ExtraLarge => "rounded-xl",
            Rounded::Full => "rounded-3xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn classes(self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleSize {
    Small,
    #[default]
    Default,
    Large,
}

impl TitleSize {
    pub fn title_classes(self) -> &'static str {
        match self {
            TitleSize::Small => "text-2xl md:text-3xl",
            TitleSize::Default => "text-3xl md:text-4xl lg:text-5xl",
            TitleSize::Large => "text-4xl md:text-5xl lg:text-6xl",
        }
    }

    pub fn subtitle_classes(self) -> &'static str {
        match self {
            TitleSize::Small => "text-base",
            TitleSize::Default => "text-lg md:text-xl",
            TitleSize::Large => "text-xl md:text-2xl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_accent_maps_to_its_own_palette() {
        let all = [
            (Accent::Primary, "primary"),
            (Accent::Secondary, "secondary"),
            (Accent::Purple, "purple"),
            (Accent::Red, "red"),
            (Accent::Amber, "amber"),
            (Accent::Emerald, "emerald"),
            (Accent::Indigo, "indigo"),
            (Accent::Slate, "slate"),
        ];
        for (accent, name) in all {
            let c = accent.classes();
            for class in [c.bg_light, c.bg_soft, c.bg_solid, c.text, c.border, c.border_active] {
                assert!(class.contains(name), "{:?} produced {}", accent, class);
            }
        }
    }

    #[test]
    fn custom_palettes_are_configured_for_tailwind() {
        let page = include_str!("../index.html");
        let config = page
            .split("tailwind.config")
            .nth(1)
            .expect("index.html configures tailwind");
        for palette in ["primary", "secondary"] {
            let shades = config
                .split(&format!("{}: {{", palette))
                .nth(1)
                .unwrap_or_else(|| panic!("{} palette missing", palette));
            let shades = &shades[..shades.find('}').unwrap_or(shades.len())];
            for shade in ["50", "100", "200", "500", "600", "700"] {
                assert!(shades.contains(&format!("{}: \"#", shade)), "{}-{} missing", palette, shade);
            }
        }
    }
}
