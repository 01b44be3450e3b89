use crate::{
    api::html,
    core::prelude::*,
    domain::prelude::*,
    generator,
    render::{pdf, qr::QrImage},
};
use axum::{
    extract::{Form, State},
    response::Html,
};
use chrono::Local;

/// Serves the booking form, dated today.
pub async fn form() -> Html<String> {
    Html(html::form_page(Local::now().date_naive(), None))
}

/// Handles a form submission.
///
/// Generates the ticket, encodes the payment and download QR codes, writes
/// the PDF receipt (embedding the download QR) to the output directory and
/// answers with the ticket card. A blank field re-renders the form instead.
///
pub async fn submit(
    State(state): State<AppState>,
    Form(trip): Form<TripRequest>,
) -> Result<Html<String>, AppError> {
    let ticket = generator::generate(trip, &mut rand::rng(), Local::now().naive_local())?;

    let payment_qr = QrImage::encode(&ticket.payment_qr_payload)?;
    let download_qr = QrImage::encode(&ticket.ticket_qr_payload)?;

    let path = state.config.output_dir.join(ticket.pdf_filename());
    pdf::write_pdf(&ticket.receipt_text(), download_qr.png_bytes(), &path).await?;

    tracing::info!(
        passenger = %ticket.trip.passenger_name,
        from = %ticket.trip.source,
        to = %ticket.trip.destination,
        fare = ticket.fare,
        bus = %ticket.bus_number,
        seat = %ticket.seat_number,
        "ticket issued"
    );

    Ok(Html(html::ticket_page(&ticket, &payment_qr, &download_qr)))
}
