use crate::model::HeadwordEntry;

/// Partition `results` by `key`.
///
/// Groups appear in the order their key is first seen, and members keep their
/// original relative order.
pub fn group_by<'a, K, F>(results: &'a [HeadwordEntry], key: F) -> Vec<(K, Vec<&'a HeadwordEntry>)>
where
    K: PartialEq,
    F: Fn(&HeadwordEntry) -> K,
{
    let mut groups: Vec<(K, Vec<&'a HeadwordEntry>)> = Vec::new();

    for result in results {
        let k = key(result);
        match groups.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, members)) => members.push(result),
            None => groups.push((k, vec![result])),
        }
    }

    groups
}

/// Homograph group of a result, taken from the first entry carrying a
/// `homographNumber`.
///
/// Upstream numbers are three digits: `"100"` and `"200"` mark the first and
/// second homograph, `"101"` a sub-entry of the first, and `"000"` a word
/// with no homographs. Anything below 100 therefore has no group, like a
/// missing or non-numeric value.
pub fn homograph_key(result: &HeadwordEntry) -> Option<u32> {
    result
        .lexical_entries
        .iter()
        .flat_map(|lexical| &lexical.entries)
        .find_map(|entry| entry.homograph_number.as_deref())
        .and_then(|number| number.trim().parse::<u32>().ok())
        .map(|number| number / 100)
        .filter(|&homograph| homograph > 0)
}
