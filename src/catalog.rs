use once_cell::sync::Lazy;
use strum_macros::EnumIter;

/// Discriminates how a layout is rendered and how its photo slots are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutShape {
    Rect,
    Heart,
    Clover,
    Hexagon,
    Circle,
}

/// Static description of a collage grid: a matrix of slot numbers where equal
/// numbers mark cells that share one photo slot.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub shape: LayoutShape,
    pub rows: usize,
    pub cols: usize,
    pub layout: Vec<Vec<u32>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Layout {0} has an empty matrix")]
    EmptyLayout(&'static str),
    #[error("Layout {0} has rows of unequal length")]
    JaggedLayout(&'static str),
    #[error("Layout {0} slot values must be a dense 1..=n set, got {1:?}")]
    SparseSlots(&'static str, Vec<u32>),
}

impl LayoutDescriptor {
    fn new(
        id: &'static str,
        name: &'static str,
        shape: LayoutShape,
        rows: usize,
        cols: usize,
        layout: Vec<Vec<u32>>,
    ) -> Self {
        Self {
            id,
            name,
            shape,
            rows,
            cols,
            layout,
        }
    }

    /// Catalog entries are authored data, so a malformed matrix is a
    /// programming error rather than something to recover from at runtime.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.layout.is_empty() || self.layout[0].is_empty() {
            return Err(CatalogError::EmptyLayout(self.id));
        }

        let width = self.layout[0].len();
        if self.layout.iter().any(|row| row.len() != width) {
            return Err(CatalogError::JaggedLayout(self.id));
        }

        let mut values: Vec<u32> = self.layout.iter().flatten().copied().collect();
        values.sort_unstable();
        values.dedup();
        let dense = values
            .iter()
            .enumerate()
            .all(|(index, value)| *value == index as u32 + 1);
        if !dense {
            return Err(CatalogError::SparseSlots(self.id, values));
        }

        Ok(())
    }
}

/// A premade template shown on the Home screen. Placeholders are in the
/// template image's own pixel space.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub placeholders: Vec<Placeholder>,
}

#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct DesignOption {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Aspect ratio presets for the crop overlay. `Free` keeps the edge-drag
/// mechanism enabled; every other variant fixes width:height and disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AspectRatio {
    Free,
    Square,
    FourFive,
    ThreeFour,
    NineSixteen,
    SixteenNine,
    ThreeTwo,
    TwoThree,
}

impl AspectRatio {
    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Free => "Free Crop",
            AspectRatio::Square => "1:1",
            AspectRatio::FourFive => "4:5",
            AspectRatio::ThreeFour => "3:4",
            AspectRatio::NineSixteen => "9:16",
            AspectRatio::SixteenNine => "16:9",
            AspectRatio::ThreeTwo => "3:2",
            AspectRatio::TwoThree => "2:3",
        }
    }

    pub fn ratio(&self) -> Option<f32> {
        match self {
            AspectRatio::Free => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::FourFive => Some(4.0 / 5.0),
            AspectRatio::ThreeFour => Some(3.0 / 4.0),
            AspectRatio::NineSixteen => Some(9.0 / 16.0),
            AspectRatio::SixteenNine => Some(16.0 / 9.0),
            AspectRatio::ThreeTwo => Some(3.0 / 2.0),
            AspectRatio::TwoThree => Some(2.0 / 3.0),
        }
    }
}

static GRID_LAYOUTS: Lazy<Vec<LayoutDescriptor>> = Lazy::new(|| {
    let layouts = vec![
        LayoutDescriptor::new("grid-10", "1x1", LayoutShape::Rect, 1, 1, vec![vec![1]]),
        LayoutDescriptor::new("grid-2", "1x2", LayoutShape::Rect, 1, 2, vec![vec![1, 2]]),
        LayoutDescriptor::new(
            "grid-3",
            "3x1",
            LayoutShape::Rect,
            3,
            1,
            vec![vec![1], vec![2], vec![3]],
        ),
        LayoutDescriptor::new("grid-4", "Clover", LayoutShape::Clover, 1, 1, vec![vec![1]]),
        LayoutDescriptor::new(
            "grid-5",
            "2x2",
            LayoutShape::Rect,
            2,
            2,
            vec![vec![1, 2], vec![3, 4]],
        ),
        LayoutDescriptor::new("grid-1", "Heart", LayoutShape::Heart, 1, 1, vec![vec![1]]),
        LayoutDescriptor::new(
            "grid-6",
            "Circles",
            LayoutShape::Circle,
            1,
            3,
            vec![vec![1, 2, 3]],
        ),
        LayoutDescriptor::new(
            "grid-7",
            "Hexagons",
            LayoutShape::Hexagon,
            1,
            3,
            vec![vec![1, 2, 3]],
        ),
        LayoutDescriptor::new(
            "grid-8",
            "Hexagon Single",
            LayoutShape::Hexagon,
            1,
            1,
            vec![vec![1]],
        ),
        LayoutDescriptor::new(
            "grid-9",
            "Stitch",
            LayoutShape::Rect,
            2,
            2,
            vec![vec![1, 2], vec![1, 2]],
        ),
        LayoutDescriptor::new(
            "grid-11",
            "Left Heavy",
            LayoutShape::Rect,
            2,
            2,
            vec![vec![1, 2], vec![1, 3]],
        ),
        LayoutDescriptor::new(
            "grid-12",
            "Right Heavy",
            LayoutShape::Rect,
            2,
            2,
            vec![vec![1, 2], vec![3, 2]],
        ),
        LayoutDescriptor::new(
            "grid-13",
            "3x2",
            LayoutShape::Rect,
            3,
            2,
            vec![vec![1, 2], vec![3, 4], vec![5, 6]],
        ),
        LayoutDescriptor::new(
            "grid-14",
            "Top Heavy",
            LayoutShape::Rect,
            2,
            3,
            vec![vec![1, 1, 1], vec![2, 3, 4]],
        ),
        LayoutDescriptor::new(
            "grid-15",
            "Bottom Heavy",
            LayoutShape::Rect,
            2,
            3,
            vec![vec![1, 2, 3], vec![4, 4, 4]],
        ),
    ];

    for layout in &layouts {
        if let Err(err) = layout.validate() {
            panic!("Invalid layout catalog entry: {}", err);
        }
    }

    layouts
});

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template {
            id: "template-1",
            name: "Spring Story 1",
            image: "https://template.canva.com/EAE9mwvNTjs/1/0/900w-SZ6AeYnAq6o.jpg",
            placeholders: vec![Placeholder {
                x: 50.0,
                y: 100.0,
                width: 200.0,
                height: 300.0,
            }],
        },
        Template {
            id: "template-2",
            name: "Spring Story 2",
            image: "https://template.canva.com/EAE7eXSczQE/1/0/900w-FDnvcSU917U.jpg",
            placeholders: vec![Placeholder {
                x: 50.0,
                y: 100.0,
                width: 200.0,
                height: 300.0,
            }],
        },
        Template {
            id: "template-3",
            name: "Spring Story 3",
            image: "https://template.canva.com/EAGJNeY7vZc/2/0/900w-bYL6TrCT4tc.jpg",
            placeholders: vec![Placeholder {
                x: 50.0,
                y: 100.0,
                width: 200.0,
                height: 300.0,
            }],
        },
    ]
});

static BIRTHDAY_TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    (1..=6)
        .map(|index| Template {
            id: match index {
                1 => "birthday-1",
                2 => "birthday-2",
                3 => "birthday-3",
                4 => "birthday-4",
                5 => "birthday-5",
                _ => "birthday-6",
            },
            name: match index {
                1 => "Birthday Card 1",
                2 => "Birthday Card 2",
                3 => "Birthday Card 3",
                4 => "Birthday Card 4",
                5 => "Birthday Card 5",
                _ => "Birthday Card 6",
            },
            image: "https://template.canva.com/EAF5sJ_zElg/1/0/1135w-cDZ1WoJwkZ0.jpg",
            placeholders: vec![Placeholder {
                x: 400.0,
                y: 600.0,
                width: 300.0,
                height: 400.0,
            }],
        })
        .collect()
});

static DESIGN_OPTIONS: &[DesignOption] = &[
    DesignOption {
        id: "design-1",
        name: "Collage",
        icon: "🖼",
    },
    DesignOption {
        id: "design-2",
        name: "Design",
        icon: "🎨",
    },
    DesignOption {
        id: "design-3",
        name: "Customize",
        icon: "🖊",
    },
    DesignOption {
        id: "design-4",
        name: "Instagram Post",
        icon: "📷",
    },
    DesignOption {
        id: "design-5",
        name: "Instagram Story",
        icon: "📷",
    },
    DesignOption {
        id: "design-6",
        name: "Logo",
        icon: "🏷",
    },
    DesignOption {
        id: "design-7",
        name: "Face Pr",
        icon: "👤",
    },
];

pub fn grid_layouts() -> &'static [LayoutDescriptor] {
    &GRID_LAYOUTS
}

pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn birthday_templates() -> &'static [Template] {
    &BIRTHDAY_TEMPLATES
}

pub fn design_options() -> &'static [DesignOption] {
    DESIGN_OPTIONS
}

pub fn layout_by_id(id: &str) -> Option<&'static LayoutDescriptor> {
    grid_layouts().iter().find(|layout| layout.id == id)
}
