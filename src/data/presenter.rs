//! Record Presenter Module
//! Pure, stateless transform from (dataset, selection) to the render model.

use crate::data::AppPrivacyRecord;

/// Display labels for the eight rendered fields, in fixed order.
pub const FIELD_LABELS: [&str; 8] = [
    "Data Collected",
    "Shared With",
    "Encrypted",
    "User Control",
    "Purpose",
    "Retention",
    "SDK Count (Third-party) Estimated",
    "App ID",
];

pub const FIELD_COUNT: usize = FIELD_LABELS.len();

/// The first row of a card grid holds this many fields; the rest wrap to a
/// second row. Presentation grouping only.
pub const PRIMARY_ROW_FIELDS: usize = 5;

/// Placeholder for an empty sequence field.
pub const NOT_SPECIFIED: &str = "Not Specified";
/// Placeholder for an absent scalar field.
pub const UNKNOWN: &str = "Unknown";

/// One normalized field ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCard {
    pub label: &'static str,
    pub value: String,
    /// Index into whatever color palette the view uses.
    pub palette_slot: usize,
}

/// One record's render model: display name plus its eight field cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCard {
    pub display_name: String,
    pub fields: Vec<FieldCard>,
}

impl RecordCard {
    /// Split into the two card rows: first five fields, then the rest.
    pub fn rows(&self) -> (&[FieldCard], &[FieldCard]) {
        self.fields.split_at(PRIMARY_ROW_FIELDS.min(self.fields.len()))
    }
}

/// Builds render models from the loaded dataset.
pub struct RecordPresenter;

impl RecordPresenter {
    /// Sorted display names for the selection dropdowns.
    pub fn display_names(records: &[AppPrivacyRecord]) -> Vec<String> {
        let mut names: Vec<String> = records.iter().map(AppPrivacyRecord::display_name).collect();
        names.sort();
        names
    }

    /// Produce the cards to render.
    ///
    /// No selection (or an empty one) renders every record in load order.
    /// A selection keeps only records whose display name matches it
    /// case-insensitively; zero matches is a normal empty result. Palette
    /// slots are computed from each record's position in the FULL list, so
    /// a filtered view keeps the colors it had in render-all mode.
    pub fn present(
        records: &[AppPrivacyRecord],
        selection: Option<&str>,
        palette_len: usize,
    ) -> Vec<RecordCard> {
        let selection = selection.filter(|name| !name.is_empty());

        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let name = record.display_name();
                match selection {
                    Some(sel) if !sel.eq_ignore_ascii_case(&name) => None,
                    _ => Some(RecordCard {
                        fields: Self::normalize_fields(record, index, palette_len),
                        display_name: name,
                    }),
                }
            })
            .collect()
    }

    /// Deterministic palette index for one field of one record.
    pub fn palette_slot(record_index: usize, field_index: usize, palette_len: usize) -> usize {
        (record_index * FIELD_COUNT + field_index) % palette_len
    }

    fn normalize_fields(
        record: &AppPrivacyRecord,
        record_index: usize,
        palette_len: usize,
    ) -> Vec<FieldCard> {
        let values = [
            Self::join_or_placeholder(&record.collected),
            Self::join_or_placeholder(&record.shared_with),
            Self::value_or_unknown(record.encrypted.as_deref()),
            Self::value_or_unknown(record.user_control.as_deref()),
            Self::join_or_placeholder(&record.purpose),
            Self::value_or_unknown(record.retention_period.as_deref()),
            Self::value_or_unknown(record.third_party_sdk_count.as_deref()),
            Self::value_or_unknown(Some(&record.app_id).filter(|id| !id.is_empty()).map(String::as_str)),
        ];

        FIELD_LABELS
            .iter()
            .zip(values)
            .enumerate()
            .map(|(field_index, (label, value))| FieldCard {
                label: *label,
                value,
                palette_slot: Self::palette_slot(record_index, field_index, palette_len),
            })
            .collect()
    }

    fn join_or_placeholder(values: &[String]) -> String {
        if values.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            values.join(", ")
        }
    }

    fn value_or_unknown(value: Option<&str>) -> String {
        value.map_or_else(|| UNKNOWN.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(app_id: &str) -> AppPrivacyRecord {
        AppPrivacyRecord {
            app_id: app_id.to_string(),
            ..Default::default()
        }
    }

    fn dataset() -> Vec<AppPrivacyRecord> {
        vec![record("whatsapp"), record("instagram"), record("telegram")]
    }

    #[test]
    fn no_selection_renders_all_in_load_order() {
        let records = dataset();
        let cards = RecordPresenter::present(&records, None, 10);
        let names: Vec<&str> = cards.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, ["Whatsapp", "Instagram", "Telegram"]);

        let empty = RecordPresenter::present(&records, Some(""), 10);
        assert_eq!(empty.len(), 3);
    }

    #[test]
    fn selection_matches_case_insensitively() {
        let records = dataset();
        let cards = RecordPresenter::present(&records, Some("iNsTaGrAm"), 10);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].display_name, "Instagram");
    }

    #[test]
    fn unmatched_selection_is_an_empty_result() {
        let records = dataset();
        assert!(RecordPresenter::present(&records, Some("Unknownapp"), 10).is_empty());
    }

    #[test]
    fn bare_record_normalizes_to_placeholders() {
        let records = vec![record("whatsapp")];
        let cards = RecordPresenter::present(&records, None, 10);
        let card = &cards[0];

        assert_eq!(card.display_name, "Whatsapp");
        assert_eq!(card.fields.len(), FIELD_COUNT);
        assert_eq!(card.fields[0].label, "Data Collected");
        assert_eq!(card.fields[0].value, NOT_SPECIFIED);
        assert_eq!(card.fields[1].value, NOT_SPECIFIED); // Shared With
        assert_eq!(card.fields[2].value, UNKNOWN); // Encrypted
        assert_eq!(card.fields[4].value, NOT_SPECIFIED); // Purpose
        assert_eq!(card.fields[7].label, "App ID");
        assert_eq!(card.fields[7].value, "whatsapp");
    }

    #[test]
    fn populated_sequences_join_with_comma_space() {
        let mut r = record("instagram");
        r.collected = vec!["Location".into(), "Contacts".into(), "Camera".into()];
        r.encrypted = Some("In transit".into());

        let cards = RecordPresenter::present(&[r], None, 10);
        assert_eq!(cards[0].fields[0].value, "Location, Contacts, Camera");
        assert_eq!(cards[0].fields[2].value, "In transit");
    }

    #[test]
    fn empty_app_id_renders_unknown() {
        let records = vec![AppPrivacyRecord::default()];
        let cards = RecordPresenter::present(&records, None, 10);
        assert_eq!(cards[0].fields[7].value, UNKNOWN);
    }

    #[test]
    fn palette_slots_are_deterministic() {
        assert_eq!(RecordPresenter::palette_slot(0, 0, 10), 0);
        assert_eq!(RecordPresenter::palette_slot(0, 7, 10), 7);
        assert_eq!(RecordPresenter::palette_slot(1, 0, 10), 8);
        assert_eq!(RecordPresenter::palette_slot(1, 2, 10), 0);
        // Repeatable for identical input.
        assert_eq!(
            RecordPresenter::palette_slot(3, 5, 10),
            RecordPresenter::palette_slot(3, 5, 10)
        );
    }

    #[test]
    fn filtered_view_keeps_render_all_colors() {
        let records = dataset();
        let all = RecordPresenter::present(&records, None, 10);
        let only = RecordPresenter::present(&records, Some("Telegram"), 10);
        assert_eq!(only[0].fields[0].palette_slot, all[2].fields[0].palette_slot);
        assert_eq!(only[0].fields[0].palette_slot, 16 % 10);
    }

    #[test]
    fn rows_split_five_then_three() {
        let records = vec![record("whatsapp")];
        let cards = RecordPresenter::present(&records, None, 10);
        let (first, second) = cards[0].rows();
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 3);
        assert_eq!(second[0].label, "Retention");
    }

    #[test]
    fn display_names_are_sorted() {
        let records = dataset();
        assert_eq!(
            RecordPresenter::display_names(&records),
            ["Instagram", "Telegram", "Whatsapp"]
        );
    }
}
