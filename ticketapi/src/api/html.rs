//! HTML for the booking form and the ticket card.
//!
//! Pages are assembled with `format!`; every user supplied value goes through
//! [`escape`] first. Styling lives in [`STYLES`] and nothing else depends on it.
//!
use crate::{domain::prelude::*, domain::trip::PASSENGERS, render::qr::QrImage};
use chrono::NaiveDate;

/// Decorative link on the card; there is no route planner behind it.
pub const ROUTES_URL: &str = "https://your-route-optimizer-link.com";

const BUS_ICON_URL: &str = "https://cdn-icons-png.flaticon.com/512/1670/1670865.png";

pub const STYLES: &str = r#"
body {
    background-color: #f5f5f5;
    font-family: 'Segoe UI', sans-serif;
}
.ticket-form {
    width: 520px;
    margin: auto;
    display: grid;
    grid-template-columns: 1fr 1fr 1fr;
    gap: 0.8rem;
}
.ticket-form .wide {
    grid-column: span 3;
}
.error {
    color: #b00020;
    font-weight: bold;
    text-align: center;
}
.ticket-box {
    background: linear-gradient(135deg, #b2fefa, #edb4f3, #ccf3c0);
    background-image: url('https://cdn.pixabay.com/photo/2018/03/11/18/05/traffic-3219239_1280.jpg');
    background-size: cover;
    background-position: center;
    padding: 2rem;
    width: 520px;
    margin: auto;
    border-radius: 25px;
    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.3);
    position: relative;
    color: #000;
}
.ticket-box h1 {
    text-align: center;
    font-size: 30px;
    background: linear-gradient(90deg, #00c6ff, #0072ff);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    font-weight: bold;
    margin-bottom: 1rem;
}
.ticket-box h2 {
    text-align: center;
    font-size: 24px;
    color: #000;
    font-weight: bold;
}
.ticket-row {
    display: flex;
    justify-content: space-between;
    margin-bottom: 10px;
}
.fare-box {
    font-size: 20px;
    font-weight: bold;
    color: green;
    text-align: center;
    margin-top: 1rem;
}
.route-button {
    position: absolute;
    bottom: 1rem;
    left: 1rem;
    background-color: #1d3557;
    color: white;
    padding: 0.4rem 0.8rem;
    border-radius: 5px;
    text-decoration: none;
    font-weight: bold;
    font-size: 14px;
}
.qr-box {
    position: absolute;
    top: 1.5rem;
    right: 1rem;
    text-align: center;
}
.fare-button {
    background-color: #e76f51;
    color: white;
    padding: 8px 16px;
    border: none;
    border-radius: 8px;
    margin-top: 10px;
    cursor: pointer;
    font-weight: bold;
}
.bus-icon {
    position: absolute;
    top: 1rem;
    left: 1rem;
    width: 40px;
}
.download {
    display: block;
    width: 520px;
    margin: 1.5rem auto;
    text-align: center;
}
"#;

/// Escapes text for use inside HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLES}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// The booking form, optionally headed by a validation message.
pub fn form_page(today: NaiveDate, error: Option<&str>) -> String {
    let error = error
        .map(|message| format!("<p class='error'>⚠️ {}</p>", escape(message)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>🎟️ Stylish Smart Transit E-Ticket</h1>
{error}
<form class='ticket-form' method='post' action='/ticket'>
    <label>📅 Date <input type='date' name='date' value='{today}' required></label>
    <label>👥 No. of Passengers <input type='number' name='num_passengers' min='{min}' max='{max}' value='1' required></label>
    <label>👤 Passenger Name <input type='text' name='passenger_name'></label>
    <label class='wide'>🚌 Source <input type='text' name='source'></label>
    <label class='wide'>📍 Destination <input type='text' name='destination'></label>
    <button class='wide' type='submit'>Generate Ticket</button>
</form>"#,
        min = PASSENGERS.start(),
        max = PASSENGERS.end(),
    );
    page("Stylish Transit E-Ticket", &body)
}

/// The styled ticket card with both QR codes and a link to the PDF receipt.
///
/// The "Payment Done" label is always shown; no payment takes place.
///
pub fn ticket_page(ticket: &TicketRecord, payment_qr: &QrImage, download_qr: &QrImage) -> String {
    let trip = &ticket.trip;
    let filename = ticket.pdf_filename();
    let body = format!(
        r#"<div class='ticket-box'>
    <img class='bus-icon' src='{BUS_ICON_URL}' />
    <a class='route-button' href='{ROUTES_URL}' target='_blank'>View Routes</a>
    <div class='qr-box'>
        <img src='{payment_qr}' width='100' /><br/>
        <button class='fare-button'>Rs.{fare} - Click to Pay</button>
        <p style='color:green; font-weight:bold;'>✔️ Payment Done</p>
        <img src='{download_qr}' width='100' /><br/>
        <small>Scan to Download</small>
    </div>
    <h1>🎉 Happy Journey!</h1>
    <h2>🚌 E-Ticket</h2>
    <div class='ticket-row'><b>Date:</b> {date}</div>
    <div class='ticket-row'><b>Passenger:</b> {name}</div>
    <div class='ticket-row'><b>Bus No:</b> {bus}</div>
    <div class='ticket-row'><b>Seat No:</b> {seat}</div>
    <div class='ticket-row'><b>Passengers:</b> {passengers}</div>
    <div class='ticket-row'><b>From:</b> {source}</div>
    <div class='ticket-row'><b>To:</b> {destination}</div>
    <div class='fare-box'>Ticket Valid Until: {valid_until}</div>
</div>
<a class='download' href='/download/{href}' download='{filename}'>📄 Download PDF Ticket</a>"#,
        payment_qr = payment_qr.data_uri(),
        download_qr = download_qr.data_uri(),
        fare = ticket.fare,
        date = trip.date,
        name = escape(&trip.passenger_name),
        bus = escape(&ticket.bus_number),
        seat = escape(&ticket.seat_number),
        passengers = trip.num_passengers,
        source = escape(&trip.source),
        destination = escape(&trip.destination),
        valid_until = ticket.valid_until(),
        href = escape(&urlencoding::encode(&filename)),
        filename = escape(&filename),
    );
    page("Your E-Ticket", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(name: &str) -> TicketRecord {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        TicketRecord {
            trip: TripRequest {
                date,
                passenger_name: name.to_string(),
                num_passengers: 2,
                source: "Delhi".to_string(),
                destination: "Agra".to_string(),
            },
            fare: 52,
            bus_number: "BUS-318".to_string(),
            seat_number: "S12".to_string(),
            expires_at: date.and_hms_opt(14, 30, 0).unwrap(),
            payment_qr_payload: format!("Payment for Rs.52 - {name}"),
            ticket_qr_payload: format!("Download Ticket for {name}"),
        }
    }

    fn render(ticket: &TicketRecord) -> String {
        let payment = QrImage::encode(&ticket.payment_qr_payload).unwrap();
        let download = QrImage::encode(&ticket.ticket_qr_payload).unwrap();
        ticket_page(ticket, &payment, &download)
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn form_defaults_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let html = form_page(today, None);
        assert!(html.contains("value='2026-10-19'"));
        assert!(html.contains("min='1' max='10'"));
        assert!(!html.contains("class='error'"));
    }

    #[test]
    fn form_shows_validation_message() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let html = form_page(today, Some("Please fill in all fields before generating your ticket."));
        assert!(html.contains("Please fill in all fields before generating your ticket."));
    }

    #[test]
    fn card_shows_every_field() {
        let html = render(&ticket("Asha"));
        for expected in [
            "Happy Journey!",
            "<b>Date:</b> 2026-10-19",
            "<b>Passenger:</b> Asha",
            "<b>Bus No:</b> BUS-318",
            "<b>Seat No:</b> S12",
            "<b>Passengers:</b> 2",
            "<b>From:</b> Delhi",
            "<b>To:</b> Agra",
            "Rs.52 - Click to Pay",
            "Payment Done",
            "Scan to Download",
            "Ticket Valid Until: 14:30:00",
            "View Routes",
            "href='/download/ticket_Asha.pdf'",
        ] {
            assert!(html.contains(expected), "missing {expected}");
        }
        assert_eq!(html.matches("src='data:image/png;base64,").count(), 2);
    }

    #[test]
    fn download_link_percent_encodes_the_filename() {
        let html = render(&ticket("Asha #2"));
        assert!(html.contains("href='/download/ticket_Asha%20%232.pdf'"));
        assert!(html.contains("download='ticket_Asha #2.pdf'"));
    }

    #[test]
    fn card_escapes_passenger_input() {
        let html = render(&ticket("<script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
