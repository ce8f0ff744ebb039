use super::dto::{AssociateSearchQuery, SearchAssociateProgramsInput};
use crate::error::Result;
use crate::tools::vocabulary::{ASSOCIATE_SCORE_TYPE, DEFAULT_MAX_RESULTS};
use crate::tools::TranslatedQuery;

/// Renames the public fields to the helper's Turkish vocabulary. Associate
/// placements are scored on TYT only, so `puan_turu` is always injected.
pub fn translate(input: &SearchAssociateProgramsInput) -> Result<TranslatedQuery> {
    let input = input.clone();
    let query = AssociateSearchQuery {
        universite: input.university,
        program: input.program,
        sehir: input.city,
        puan_turu: ASSOCIATE_SCORE_TYPE,
        universite_turu: input.university_type,
        ucret: input.fee_type,
        ogretim_turu: input.education_type,
        doluluk: input.availability,
        siralama: input.siralama,
        max_results: input.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
    };
    TranslatedQuery::from_serialize(&query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::vocabulary::{FeeType, StringOrList, UniversityType};
    use serde_json::json;

    #[test]
    fn renames_public_fields() {
        let query = translate(&SearchAssociateProgramsInput {
            university: Some(StringOrList::One("anadolu".into())),
            city: Some(StringOrList::Many(vec!["eskişehir".into(), "ankara".into()])),
            university_type: Some(UniversityType::Devlet),
            fee_type: Some(FeeType::AcikogretimUcretli),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(query.get("universite"), Some(&json!("anadolu")));
        assert_eq!(query.get("sehir"), Some(&json!(["eskişehir", "ankara"])));
        assert_eq!(query.get("universite_turu"), Some(&json!("Devlet")));
        assert_eq!(query.get("ucret"), Some(&json!("AÖ-Ücretli")));
        for public in ["university", "city", "university_type", "fee_type"] {
            assert!(query.get(public).is_none(), "{} leaked through", public);
        }
    }

    #[test]
    fn score_type_is_always_tyt() {
        let bare = translate(&SearchAssociateProgramsInput::default()).unwrap();
        let ranked = translate(&SearchAssociateProgramsInput {
            siralama: Some(250_000),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(bare.get("puan_turu"), Some(&json!("tyt")));
        assert_eq!(ranked.get("puan_turu"), Some(&json!("tyt")));
        assert_eq!(bare.get("max_results"), Some(&json!(100)));
    }

    #[test]
    fn translation_is_deterministic() {
        let input = SearchAssociateProgramsInput {
            program: Some(StringOrList::One("tıbbi laboratuvar".into())),
            max_results: Some(10),
            ..Default::default()
        };
        assert_eq!(translate(&input).unwrap(), translate(&input).unwrap());
    }
}
