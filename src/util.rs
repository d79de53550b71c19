use chrono::NaiveDate;
use reqwest::Url;

const LAYOUT_ISO: &str = "%Y-%m-%d";

/// Reports whether `date` is a calendar date written exactly as `YYYY-MM-DD`.
pub fn is_valid_date(date: &str) -> bool {
    // chrono accepts unpadded fields, the API does not
    let shape_ok = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(date, LAYOUT_ISO).is_ok()
}

/// Replaces the query of `url` with `params`, sorted by key.
///
/// Leaves the URL without a `?` when there is nothing to encode.
pub(crate) fn set_query(url: &mut Url, mut params: Vec<(&str, String)>) {
    url.set_query(None);
    if params.is_empty() {
        return;
    }
    params.sort_by(|a, b| a.0.cmp(b.0));
    url.query_pairs_mut().extend_pairs(params);
}

/// Appends `segments` to the path of `base`.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // cannot-be-a-base URLs are rejected when the client is built
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
