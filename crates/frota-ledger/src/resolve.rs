use frota_types::Dataset;

/// Resolve a station reference to its index in `dataset.stations`.
///
/// The reference may be a station id (refuels imported from older datasets
/// stored ids) or a station name, matched case-insensitively. One explicit
/// function so every caller resolves the same way.
pub fn resolve_station(dataset: &Dataset, station_ref: &str) -> Option<usize> {
    let needle = station_ref.trim();
    if needle.is_empty() {
        return None;
    }

    if let Some(i) = dataset
        .stations
        .iter()
        .position(|s| s.id.to_string() == needle)
    {
        return Some(i);
    }

    let lower = needle.to_lowercase();
    dataset
        .stations
        .iter()
        .position(|s| s.name.to_lowercase() == lower)
}
