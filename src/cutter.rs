use memchr::memchr_iter;

use crate::errors::*;

/// Parameters for cutting fasta headers.
///
/// `cut_before` is a set of marker bytes: the header is cut to everything strictly
/// after the selected marker occurrence. `cut_before_occ` selects which occurrence
/// (1-based, counted from the left); unset or zero selects the *last* occurrence.
/// `cut_after` is a set of marker bytes: the header is truncated before the earliest
/// occurrence of any of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutParams {
    cut_before: Vec<u8>,
    cut_before_occ: Option<usize>,
    cut_after: Vec<u8>,
}

impl CutParams {
    pub fn new(
        cut_before: impl AsRef<[u8]>,
        cut_before_occ: Option<usize>,
        cut_after: impl AsRef<[u8]>,
    ) -> Self {
        Self {
            cut_before: cut_before.as_ref().to_owned(),
            cut_before_occ,
            cut_after: cut_after.as_ref().to_owned(),
        }
    }

    /// Both marker sets are empty, so cutting would leave every header unchanged.
    pub fn is_noop(&self) -> bool {
        self.cut_before.is_empty() && self.cut_after.is_empty()
    }

    /// Cut `header` before `cut_before` and after `cut_after`.
    ///
    /// If `cut_before` is `#` then `HG02055#1#h1tg000001l` becomes `h1tg000001l`.
    ///
    /// With `cut_before_occ = 2`, cutting happens at the second `#` from the left,
    /// so `HG02055#1#h1tg000001l#EBV` becomes `h1tg000001l#EBV`. An occurrence index
    /// past the final marker clamps to the last one.
    ///
    /// If `cut_after` is a whitespace, then `chr1  AC:CM000663.2  gi:568336023`
    /// becomes `chr1`. `cut_after` operates on the already-cut header.
    ///
    /// The result is always a subslice of `header`. Fails with [`Error::EmptyHeader`]
    /// when cutting removes the entire header; the error names the original header.
    pub fn cut<'h>(&self, header: &'h [u8]) -> Result<&'h [u8]> {
        let mut res = header;

        if !self.cut_before.is_empty() {
            let occs: Vec<usize> = if let [b] = self.cut_before.as_slice() {
                memchr_iter(*b, res).collect()
            } else {
                res.iter()
                    .enumerate()
                    .filter(|(_, c)| self.cut_before.contains(c))
                    .map(|(i, _)| i)
                    .collect()
            };

            if !occs.is_empty() {
                let pos = match self.cut_before_occ {
                    // unset selects the last occurrence, explicit 1 the first
                    None | Some(0) => *occs.last().unwrap(),
                    Some(occ) => occs[occ.min(occs.len()) - 1],
                };
                res = if pos + 1 < res.len() { &res[pos + 1..] } else { &[] };
            }
        }

        if !self.cut_after.is_empty() {
            if let Some(pos) = res.iter().position(|c| self.cut_after.contains(c)) {
                res = &res[..pos];
            }
        }

        if res.is_empty() {
            return Err(Error::EmptyHeader {
                header: utf8(header),
            });
        }

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_leave_header_unchanged() {
        let params = CutParams::new("", None, "");
        assert_eq!(
            params.cut(b"HG02055#1#h1tg000001l").unwrap(),
            b"HG02055#1#h1tg000001l"
        );
        assert!(params.is_noop());
    }

    #[test]
    fn cut_before_defaults_to_last_occurrence() {
        let params = CutParams::new("#", None, "");
        assert_eq!(params.cut(b"HG02055#1#h1tg000001l").unwrap(), b"h1tg000001l");
    }

    #[test]
    fn cut_before_occ_counts_from_the_left() {
        let params = CutParams::new("#", Some(2), "");
        assert_eq!(
            params.cut(b"HG02055#1#h1tg000001l#EBV").unwrap(),
            b"h1tg000001l#EBV"
        );
    }

    #[test]
    fn cut_before_occ_one_selects_the_first_occurrence() {
        let params = CutParams::new("#", Some(1), "");
        assert_eq!(params.cut(b"HG02055#1#h1tg000001l").unwrap(), b"1#h1tg000001l");
    }

    #[test]
    fn cut_before_occ_zero_behaves_as_unset() {
        let params = CutParams::new("#", Some(0), "");
        assert_eq!(params.cut(b"HG02055#1#h1tg000001l").unwrap(), b"h1tg000001l");
    }

    #[test]
    fn cut_before_occ_clamps_to_the_last_occurrence() {
        let params = CutParams::new("#", Some(99), "");
        assert_eq!(params.cut(b"HG02055#1#h1tg000001l").unwrap(), b"h1tg000001l");
    }

    #[test]
    fn cut_before_set_matches_any_member() {
        let params = CutParams::new("#|", None, "");
        assert_eq!(params.cut(b"HG02055|1#h1tg000001l").unwrap(), b"h1tg000001l");
    }

    #[test]
    fn cut_after_truncates_at_the_earliest_marker() {
        let params = CutParams::new("", None, " ");
        assert_eq!(
            params.cut(b"chr1  AC:CM000663.2  gi:568336023").unwrap(),
            b"chr1"
        );
    }

    #[test]
    fn cut_after_set_uses_the_earliest_of_any_marker() {
        let params = CutParams::new("", None, " \t");
        assert_eq!(params.cut(b"chr1\tAC:CM000663.2 x").unwrap(), b"chr1");
    }

    #[test]
    fn unmatched_markers_leave_header_unchanged() {
        let params = CutParams::new("z", None, "");
        assert_eq!(params.cut(b"chr1").unwrap(), b"chr1");
    }

    #[test]
    fn cutting_away_the_whole_header_fails() {
        let params = CutParams::new("X", None, "");
        let err = params.cut(b"X").unwrap_err();
        assert!(matches!(err, Error::EmptyHeader { header } if header == "X"));
    }

    #[test]
    fn cut_after_at_the_first_byte_fails() {
        let params = CutParams::new("", None, " ");
        assert!(matches!(
            params.cut(b" chr1"),
            Err(Error::EmptyHeader { .. })
        ));
    }

    #[test]
    fn cut_before_runs_before_cut_after() {
        let params = CutParams::new("#", None, " ");
        assert_eq!(params.cut(b"CHM13#chr1  AC:CM000663.2").unwrap(), b"chr1");
    }

    #[test]
    fn cutting_is_idempotent_once_no_markers_remain() {
        let params = CutParams::new("#", None, " ");
        let once = params.cut(b"HG02055#1#h1tg000001l").unwrap();
        assert_eq!(params.cut(once).unwrap(), once);
    }
}
