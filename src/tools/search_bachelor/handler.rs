use super::dto::{BachelorSearchQuery, SearchBachelorProgramsInput};
use crate::error::Result;
use crate::tools::vocabulary::DEFAULT_MAX_RESULTS;
use crate::tools::TranslatedQuery;

pub fn translate(input: &SearchBachelorProgramsInput) -> Result<TranslatedQuery> {
    let input = input.clone();
    let query = BachelorSearchQuery {
        universite: input.universite,
        program: input.program,
        sehir: input.sehir,
        puan_turu: input.puan_turu,
        universite_turu: input.universite_turu,
        ucret: input.ucret,
        ogretim_turu: input.ogretim_turu,
        doluluk: input.doluluk,
        siralama: input.siralama,
        max_results: input.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
    };
    TranslatedQuery::from_serialize(&query)
}
