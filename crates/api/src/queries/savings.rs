//! Savings contract subgraph queries.

use graphql_client::GraphQLQuery;

/// Custom scalar type mapping for GraphQL.
pub type BigDecimal = String;

/// Query for the latest and 24h-old exchange rate snapshots of a savings
/// contract.
#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "schema/mstable.graphql",
    query_path = "queries/exchange_rates.graphql",
    response_derives = "Debug, Clone",
    variables_derives = "Debug, Clone"
)]
pub struct GetExchangeRates;
