use std::net::SocketAddr;

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::{header::USER_AGENT, HeaderMap},
    Json,
};
use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    consts::rsvp_const::RSVP_TABLE,
    errors::{Error, Result},
    models::{
        response::ApiResponse,
        rsvp::{NewRsvp, RsvpPayload},
    },
    state::AppState,
    utils::{net::client_ip, time::parse_client_timestamp, validator::first_error},
};

/// Validate-then-persist, one independent transaction per request.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: core::result::Result<Json<RsvpPayload>, JsonRejection>,
) -> Result<Json<ApiResponse>> {
    let Json(payload) = payload?;

    let payload = payload.normalized();
    payload
        .validate()
        .map_err(|errors| Error::Validation(first_error(&errors)))?;

    // validation already rejected unparseable values, so this only falls back
    // to server time when the client sent nothing
    let submitted_at = payload
        .submitted_at_iso
        .as_deref()
        .and_then(parse_client_timestamp)
        .unwrap_or_else(Utc::now);

    let ip = client_ip(&headers, peer);
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let row = NewRsvp::from_payload(payload, submitted_at, Some(ip), user_agent);
    insert_rsvp(&state.db, &row).await?;

    Ok(Json(ApiResponse::ok()))
}

async fn insert_rsvp(db: &PgPool, row: &NewRsvp) -> Result<()> {
    let sql = format!(
        "INSERT INTO {RSVP_TABLE} \
         (submitted_at, name, attending, guests, diet, note, \
          wedding_groom, wedding_bride, wedding_date_iso, source, ip, user_agent) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"
    );

    sqlx::query(&sql)
        .bind(row.submitted_at)
        .bind(row.name.as_str())
        .bind(row.attending.as_str())
        .bind(row.guests)
        .bind(row.diet.as_deref())
        .bind(row.note.as_deref())
        .bind(row.wedding_groom.as_str())
        .bind(row.wedding_bride.as_str())
        .bind(row.wedding_date_iso.as_str())
        .bind(row.source.as_str())
        .bind(row.ip.as_deref())
        .bind(row.user_agent.as_deref())
        .execute(db)
        .await?;

    Ok(())
}
