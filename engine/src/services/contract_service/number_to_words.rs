// Handler for the NumberToWords RPC
use tonic::{Response, Status};

use crate::data::brazilian_format::format_currency;
use crate::services::{AmountRequest, AmountWordsResponse};
use crate::speller::number_to_words;

pub async fn handle_number_to_words(req_payload: AmountRequest) -> Result<Response<AmountWordsResponse>, Status> {
    let words = number_to_words(req_payload.amount)?;
    Ok(Response::new(AmountWordsResponse {
        words,
        formatted: format_currency(req_payload.amount),
    }))
}
