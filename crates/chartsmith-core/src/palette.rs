// File: crates/chartsmith-core/src/palette.rs
// Summary: Named color palettes used to assign series colors.

/// A fixed, read-only color table. Palettes are shared constants and are never
/// mutated at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

pub const STANDARD: Palette = Palette {
    name: "standard",
    colors: &[
        "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272",
        "#fc8452", "#9a60b4", "#ea7ccc",
    ],
};

pub const WARM: Palette = Palette {
    name: "warm",
    colors: &[
        "#c23531", "#d48265", "#f28e2b", "#e15759", "#ff9da7", "#bc5090",
        "#b07aa1", "#9c755f",
    ],
};

pub const COOL: Palette = Palette {
    name: "cool",
    colors: &[
        "#2f4554", "#4e79a7", "#61a0a8", "#76b7b2", "#59a14f", "#86bc86",
        "#499894", "#274e13",
    ],
};

pub const PASTEL: Palette = Palette {
    name: "pastel",
    colors: &[
        "#a1c9f4", "#ffb482", "#8de5a1", "#ff9f9b", "#d0bbff", "#debb9b",
        "#fab0e4", "#cfcfcf",
    ],
};

pub const MONO: Palette = Palette {
    name: "mono",
    colors: &[
        "#16161a", "#3a3a40", "#5e5e66", "#82828c", "#a6a6b2", "#cacad8",
    ],
};

/// Return the list of built-in palettes.
pub fn presets() -> [&'static Palette; 5] {
    [&STANDARD, &WARM, &COOL, &PASTEL, &MONO]
}

/// Find a palette by its `name`, falling back to the standard palette.
pub fn find(name: &str) -> &'static Palette {
    for p in presets() {
        if p.name.eq_ignore_ascii_case(name) {
            return p;
        }
    }
    &STANDARD
}

impl Palette {
    /// Color for slot `i`, wrapping past the end of the table.
    pub fn color_at(&self, i: usize) -> &'static str {
        self.colors[i % self.colors.len()]
    }
}
