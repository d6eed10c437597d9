use crate::restriction_enzyme::RestrictionEnzyme;
use anyhow::{Result, anyhow};

const BUILTIN_ENZYMES_JSON: &str = include_str!("../assets/enzymes.json");

/// Restriction enzyme catalog. The built-in catalog is embedded at compile
/// time; callers can substitute their own with `Enzymes::new`.
#[derive(Clone, Debug)]
pub struct Enzymes {
    restriction_enzymes: Vec<RestrictionEnzyme>,
    max_re_length: usize,
}

impl Enzymes {
    pub fn new(json_text: &str) -> Result<Self> {
        let mut ret = Self {
            restriction_enzymes: vec![],
            max_re_length: 0,
        };
        let res: serde_json::Value = serde_json::from_str(json_text)?;
        let arr = res
            .as_array()
            .ok_or(anyhow!("Enzymes file is not a JSON array"))?;
        for row in arr {
            let enzyme_type = match row.get("type") {
                Some(et) => et,
                None => continue,
            };
            match enzyme_type.as_str() {
                Some("restriction") => {
                    let mut re: RestrictionEnzyme =
                        match serde_json::from_str(&row.to_string()).ok() {
                            Some(re) => re,
                            None => return Err(anyhow!("Bad restriction enzyme: {row}")),
                        };
                    // Canonical casing, to match validated sequences
                    re.sequence = re.sequence.to_ascii_uppercase();
                    ret.restriction_enzymes.push(re);
                }
                Some(other) => return Err(anyhow!("Unknown enzyme type '{other}' in {}", row)),
                None => return Err(anyhow!("Missing enzyme type for {}", row)),
            }
        }
        ret.max_re_length = ret
            .restriction_enzymes
            .iter()
            .map(|re| re.sequence.len())
            .max()
            .unwrap_or(0);
        Ok(ret)
    }

    #[inline(always)]
    pub fn restriction_enzymes(&self) -> &Vec<RestrictionEnzyme> {
        &self.restriction_enzymes
    }

    pub fn restriction_enzymes_by_name(&self, names: &[&str]) -> Vec<RestrictionEnzyme> {
        self.restriction_enzymes
            .iter()
            .filter(|re| names.contains(&re.name.as_str()))
            .cloned()
            .collect()
    }

    #[inline(always)]
    pub fn max_re_length(&self) -> usize {
        self.max_re_length
    }
}

impl Default for Enzymes {
    fn default() -> Self {
        Enzymes::new(BUILTIN_ENZYMES_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let enzymes = Enzymes::default();
        let names: Vec<&str> = enzymes
            .restriction_enzymes()
            .iter()
            .map(|re| re.name.as_str())
            .collect();
        assert_eq!(names, vec!["EcoRI", "BamHI", "HindIII", "NotI"]);
        assert_eq!(enzymes.max_re_length(), 8);
        let eco_ri = &enzymes.restriction_enzymes_by_name(&["EcoRI"])[0];
        assert_eq!(eco_ri.sequence, "GAATTC");
    }

    #[test]
    fn test_custom_catalog() {
        let enzymes = Enzymes::new(
            r#"[{ "type": "restriction", "name": "TaqI", "sequence": "tcga", "note": null }]"#,
        )
        .unwrap();
        assert_eq!(enzymes.restriction_enzymes().len(), 1);
        assert_eq!(enzymes.restriction_enzymes()[0].sequence, "TCGA");
        assert_eq!(enzymes.max_re_length(), 4);
    }

    #[test]
    fn test_rejects_bad_catalog() {
        assert!(Enzymes::new("{}").is_err());
        assert!(Enzymes::new(r#"[{ "type": "protease", "name": "X" }]"#).is_err());
        assert!(Enzymes::new(r#"[{ "type": "restriction", "name": "X" }]"#).is_err());
    }
}
