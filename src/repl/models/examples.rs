//! Built-in example ingredient lists used to prefill the input.

/// A fixed (label, ingredient text) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleEntry {
    pub label: &'static str,
    pub ingredients: &'static str,
}

pub const EXAMPLES: [ExampleEntry; 3] = [
    ExampleEntry {
        label: "Protein Bar",
        ingredients: "Protein Blend (Whey Protein Isolate, Milk Protein Isolate), Soluble Corn Fiber, Almonds, Water, Erythritol, Natural Flavors, Palm Kernel Oil, Sea Salt, Calcium Carbonate, Sucralose, Steviol Glycosides",
    },
    ExampleEntry {
        label: "Breakfast Cereal",
        ingredients: "Whole Grain Oats, Sugar, Corn Syrup, Modified Corn Starch, Honey, Salt, Tripotassium Phosphate, Natural Flavor, Vitamin E, Iron, Vitamin A, Vitamin B6, Vitamin B2, Vitamin B1, Folic Acid, Vitamin B12, Vitamin D3",
    },
    ExampleEntry {
        label: "Yogurt",
        ingredients: "Cultured Pasteurized Nonfat Milk, Sugar, Modified Corn Starch, Strawberries, Contains 1% or less of: Kosher Gelatin, Natural Flavor, Citric Acid, Tricalcium Phosphate, Pectin, Acesulfame Potassium, Sucralose, Red 40, Vitamin D3",
    },
];

pub fn example(index: usize) -> Option<&'static ExampleEntry> {
    EXAMPLES.get(index)
}
