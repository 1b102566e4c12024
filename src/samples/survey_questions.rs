//! Lists the template survey questions an agent's survey config can refer to

use super::Reporter;
use crate::api::BizCommClient;
use crate::error::Result;
use crate::model::SurveyQuestion;
use std::io::Write;

pub async fn run<W: Write>(
    client: &BizCommClient,
    reporter: &mut Reporter<W>,
) -> Result<Vec<SurveyQuestion>> {
    client.authenticate().await?;

    reporter.header("List Template Survey Questions")?;
    let questions: Vec<SurveyQuestion> = client.list(None).await?;
    reporter.resource(&questions)?;

    Ok(questions)
}
