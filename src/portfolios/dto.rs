use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo::{CalculatorParams, Portfolio, StockAllocation};

/// Request body for creating a portfolio. `preferences`, `calculator`
/// and `stocks` are optional; everything else is required by schema.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolioRequest {
    pub title: String,
    pub goals: String,
    pub industries: String,
    pub risks: String,
    pub preferences: Option<String>,
    pub calculator: Option<CalculatorParams>,
    #[serde(default)]
    pub stocks: Vec<StockAllocation>,
}

/// Partial update: only the provided fields are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePortfolioRequest {
    pub title: Option<String>,
    pub goals: Option<String>,
    pub industries: Option<String>,
    pub risks: Option<String>,
    pub preferences: Option<String>,
    pub calculator: Option<CalculatorParams>,
    pub stocks: Option<Vec<StockAllocation>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPortfolioResponse {
    pub message: String,
    pub portfolio_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub portfolio: Portfolio,
}

#[derive(Debug, Serialize)]
pub struct PortfolioListResponse {
    pub portfolios: Vec<Portfolio>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedPortfolioResponse {
    pub message: String,
    pub portfolio: Portfolio,
}

#[derive(Debug, Serialize)]
pub struct DeletedPortfolioResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_nested_camel_case_documents() {
        let req: CreatePortfolioRequest = serde_json::from_str(
            r#"{
                "title": "Retirement",
                "goals": "Grow steadily",
                "industries": "tech, energy",
                "risks": "moderate",
                "calculator": {
                    "moneyToInvest": 10000,
                    "monthlyInvestment": 250,
                    "riskLevel": "medium",
                    "investmentYears": 20
                },
                "stocks": [
                    {"ticker": "AAPL", "number": 10, "basePrice": 180.5, "percentage": 40.0}
                ]
            }"#,
        )
        .unwrap();

        let calc = req.calculator.expect("calculator present");
        assert_eq!(calc.money_to_invest, Some(10000.0));
        assert_eq!(calc.investment_years, Some(20));
        assert_eq!(req.stocks.len(), 1);
        assert_eq!(req.stocks[0].ticker, "AAPL");
        assert_eq!(req.stocks[0].base_price, Some(180.5));
        assert!(req.preferences.is_none());
    }

    #[test]
    fn create_request_requires_risks() {
        let err = serde_json::from_str::<CreatePortfolioRequest>(
            r#"{"title":"t","goals":"g","industries":"i"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("risks"));
    }

    #[test]
    fn empty_json_object_is_a_valid_empty_update() {
        let req: UpdatePortfolioRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.goals.is_none());
        assert!(req.industries.is_none());
        assert!(req.risks.is_none());
        assert!(req.preferences.is_none());
        assert!(req.calculator.is_none());
        assert!(req.stocks.is_none());
    }

    #[test]
    fn update_with_one_field_leaves_the_rest_unset() {
        let req: UpdatePortfolioRequest =
            serde_json::from_str(r#"{"title":"renamed"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("renamed"));
        assert!(req.goals.is_none());
    }

    #[test]
    fn created_response_uses_camel_case_id() {
        let json = serde_json::to_string(&CreatedPortfolioResponse {
            message: "ok".into(),
            portfolio_id: Uuid::nil(),
        })
        .unwrap();
        assert!(json.contains("portfolioId"));
    }
}
