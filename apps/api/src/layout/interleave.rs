use crate::models::Ad;

/// Mediums placed after each large ad.
pub const MEDIUMS_PER_LARGE: usize = 2;

/// Grid order for the main wall area.
#[derive(Debug, Clone, PartialEq)]
pub struct Interleaved<'a> {
    pub cells: Vec<&'a Ad>,
    /// Mediums left over once every large was placed. Not shown.
    pub dropped_mediums: usize,
}

/// Places each large ad followed by the next two mediums from the front of
/// `medium`. Larges keep going after the mediums run out; mediums left after
/// the last large are dropped.
pub fn interleave<'a>(large: &'a [Ad], medium: &'a [Ad]) -> Interleaved<'a> {
    let mut cells = Vec::with_capacity(large.len() * (1 + MEDIUMS_PER_LARGE));
    let mut mediums = medium.chunks(MEDIUMS_PER_LARGE);

    for big in large {
        cells.push(big);
        if let Some(pair) = mediums.next() {
            cells.extend(pair);
        }
    }

    let dropped_mediums = mediums.map(<[Ad]>::len).sum::<usize>();
    Interleaved {
        cells,
        dropped_mediums,
    }
}
