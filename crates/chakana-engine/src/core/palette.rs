use serde::{Deserialize, Serialize};

/// One sampled pixel, as supplied by the pattern adapter.
///
/// Components are whatever the sampler read; no clamping or validation
/// happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Squared Euclidean distance to another color.
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn distance_sq(self, other: Self) -> u32 {
        let dr = self.0 as i32 - other.0 as i32;
        let dg = self.1 as i32 - other.1 as i32;
        let db = self.2 as i32 - other.2 as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// Index of a category in the palette's ordered list.
///
/// The default category is the palette's first entry, matching a freshly
/// constructed board before any pattern load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(u8);

impl Category {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One palette entry: a named category with its calibrated reference color
/// and the points a box of that category is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub reference: Rgb,
    pub points: u32,
}

/// Ordered reference palette: color classification plus point values.
///
/// The order is part of the contract: [`Palette::classify`] resolves
/// nearest-color ties toward the first minimum in list order, so two
/// sessions built from the same palette always classify identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    categories: Vec<CategorySpec>,
}

impl Palette {
    /// # Panics
    ///
    /// Panics if `categories` is empty; classification must be total.
    #[must_use]
    pub fn new(categories: Vec<CategorySpec>) -> Self {
        assert!(!categories.is_empty(), "palette must have a category");
        Self { categories }
    }

    /// The calibrated reference palette of the original pattern images.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![
            CategorySpec {
                name: "verde".to_owned(),
                reference: Rgb(235, 244, 228),
                points: 1,
            },
            CategorySpec {
                name: "amarillo".to_owned(),
                reference: Rgb(255, 230, 153),
                points: 2,
            },
            CategorySpec {
                name: "marron".to_owned(),
                reference: Rgb(191, 143, 0),
                points: 4,
            },
        ])
    }

    /// The category whose reference color is nearest to `sample`.
    ///
    /// Distance is squared Euclidean over RGB; ties go to the earliest
    /// category in palette order. Deterministic for any input.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn classify(&self, sample: Rgb) -> Category {
        let mut best = Category::default();
        let mut best_dist = u32::MAX;
        for (index, spec) in self.categories.iter().enumerate() {
            let dist = sample.distance_sq(spec.reference);
            if dist < best_dist {
                best_dist = dist;
                best = Category(index as u8);
            }
        }
        best
    }

    #[must_use]
    pub fn spec(&self, category: Category) -> &CategorySpec {
        &self.categories[category.index()]
    }

    #[must_use]
    pub fn points(&self, category: Category) -> u32 {
        self.spec(category).points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Entries in palette order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn categories(&self) -> impl Iterator<Item = (Category, &CategorySpec)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(index, spec)| (Category(index as u8), spec))
    }
}
