//! Preset picker: fuzzy filter over the built-in catalog.

use crate::state::PickerState;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tintsmith::presets;

/// Update the filtered list from the query (fuzzy match on name + description).
pub fn update_picker_filter(picker: &mut PickerState) {
    let query = picker.query.trim().to_lowercase();
    if query.is_empty() {
        picker.filtered = (0..presets().len()).collect();
    } else {
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = presets()
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let name_score = matcher.fuzzy_match(&p.name.to_lowercase(), &query);
                let desc_score = matcher.fuzzy_match(&p.description.to_lowercase(), &query);
                name_score.or(desc_score).map(|s| (s, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        picker.filtered = scored.into_iter().map(|(_, i)| i).collect();
    }
    picker.selected_index = 0;
}
