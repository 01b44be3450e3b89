pub mod prelude {
    pub use super::{
        heartbeat::Heartbeat,
        ticket::TicketRecord,
        trip::{TripRequest, ValidationError},
    };
}

pub mod trip {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Allowed number of passengers on a single ticket.
    pub const PASSENGERS: std::ops::RangeInclusive<u8> = 1..=10;

    /// Message shown to the user when a required text field is left blank.
    pub const FILL_ALL_FIELDS: &str = "Please fill in all fields before generating your ticket.";

    /// Trip details submitted through the booking form.
    ///
    /// Text fields default to empty so that a missing field surfaces as a
    /// validation error rather than a deserialization failure.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct TripRequest {
        pub date: NaiveDate,
        #[serde(default)]
        pub passenger_name: String,
        pub num_passengers: u8,
        #[serde(default)]
        pub source: String,
        #[serde(default)]
        pub destination: String,
    }

    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum ValidationError {
        #[error("{0} must not be blank")]
        BlankField(&'static str),

        #[error("number of passengers must be between 1 and 10, got {0}")]
        PassengerCount(u8),
    }

    impl ValidationError {
        /// The message presented next to the form when a submission is rejected.
        pub fn user_message(&self) -> String {
            match self {
                Self::BlankField(_) => FILL_ALL_FIELDS.to_string(),
                other => format!("{}.", capitalize(&other.to_string())),
            }
        }
    }

    fn capitalize(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    impl TripRequest {
        /// Checks that every text field has content once surrounding
        /// whitespace is removed and that the passenger count is in range.
        ///
        pub fn validate(&self) -> Result<(), ValidationError> {
            let fields = [
                ("passenger name", &self.passenger_name),
                ("source", &self.source),
                ("destination", &self.destination),
            ];
            if let Some((field, _)) = fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
                return Err(ValidationError::BlankField(field));
            }
            if !PASSENGERS.contains(&self.num_passengers) {
                return Err(ValidationError::PassengerCount(self.num_passengers));
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn trip(name: &str, source: &str, destination: &str) -> TripRequest {
            TripRequest {
                date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                passenger_name: name.to_string(),
                num_passengers: 1,
                source: source.to_string(),
                destination: destination.to_string(),
            }
        }

        #[test]
        fn accepts_filled_in_trip() {
            assert_eq!(trip("Asha", "Delhi", "Agra").validate(), Ok(()));
        }

        #[test]
        fn rejects_blank_and_whitespace_fields() {
            assert_eq!(
                trip("", "Delhi", "Agra").validate(),
                Err(ValidationError::BlankField("passenger name"))
            );
            assert_eq!(
                trip("Asha", "   ", "Agra").validate(),
                Err(ValidationError::BlankField("source"))
            );
            assert_eq!(
                trip("Asha", "Delhi", "\t\n").validate(),
                Err(ValidationError::BlankField("destination"))
            );
        }

        #[test]
        fn rejects_passenger_count_out_of_range() {
            let mut request = trip("Asha", "Delhi", "Agra");
            request.num_passengers = 0;
            assert_eq!(request.validate(), Err(ValidationError::PassengerCount(0)));
            request.num_passengers = 11;
            assert_eq!(request.validate(), Err(ValidationError::PassengerCount(11)));
            request.num_passengers = 10;
            assert_eq!(request.validate(), Ok(()));
        }

        #[test]
        fn blank_field_message_asks_to_fill_everything_in() {
            assert_eq!(
                ValidationError::BlankField("source").user_message(),
                FILL_ALL_FIELDS
            );
            assert_eq!(
                ValidationError::PassengerCount(12).user_message(),
                "Number of passengers must be between 1 and 10, got 12."
            );
        }

        #[test]
        fn deserializes_from_form_body() {
            let body = "date=2026-10-19&num_passengers=2&passenger_name=Asha&source=Delhi&destination=Agra";
            let request: TripRequest = serde_urlencoded::from_str(body).unwrap();
            assert_eq!(request.num_passengers, 2);
            assert_eq!(request.passenger_name, "Asha");
        }
    }
}

pub mod ticket {
    use super::trip::TripRequest;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Serialize};

    const FILENAME_PREFIX: &str = "ticket_";
    const FILENAME_EXTENSION: &str = ".pdf";

    /// Longest file name most filesystems accept, in bytes.
    pub const MAX_FILENAME_BYTES: usize = 255;

    /// A generated ticket for one form submission.
    ///
    /// Fare, bus and seat are drawn once and shared by every rendering of the
    /// ticket (card and PDF receipt). Nothing is persisted.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
    pub struct TicketRecord {
        pub trip: TripRequest,
        pub fare: u32,
        pub bus_number: String,
        pub seat_number: String,
        pub expires_at: NaiveDateTime,
        pub payment_qr_payload: String,
        pub ticket_qr_payload: String,
    }

    impl TicketRecord {
        /// Expiration time as shown on the card and receipt.
        pub fn valid_until(&self) -> String {
            self.expires_at.format("%H:%M:%S").to_string()
        }

        /// Name of the downloadable receipt, `ticket_<passenger name>.pdf`.
        ///
        /// Path separators and other characters that are not allowed in file
        /// names are stripped from the passenger name, and the name is cut at a
        /// char boundary so the whole file name fits in [`MAX_FILENAME_BYTES`].
        ///
        pub fn pdf_filename(&self) -> String {
            let name = sanitize_filename::sanitize(&self.trip.passenger_name);
            let budget = MAX_FILENAME_BYTES - FILENAME_PREFIX.len() - FILENAME_EXTENSION.len();
            let mut end = name.len().min(budget);
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            format!("{FILENAME_PREFIX}{}{FILENAME_EXTENSION}", &name[..end])
        }

        /// Plain text body of the PDF receipt, one field per line.
        pub fn receipt_text(&self) -> String {
            let trip = &self.trip;
            format!(
                "\nE-Ticket Receipt\n\
                 ------------------\n\
                 Date: {}\n\
                 Passenger Name: {}\n\
                 Bus Number: {}\n\
                 Seat Number: {}\n\
                 Number of Passengers: {}\n\
                 From: {}\n\
                 To: {}\n\
                 Fare: Rs.{}\n\
                 Status: Paid\n\
                 Valid Until: {}\n",
                trip.date,
                trip.passenger_name,
                self.bus_number,
                self.seat_number,
                trip.num_passengers,
                trip.source,
                trip.destination,
                self.fare,
                self.valid_until(),
            )
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn record(name: &str) -> TicketRecord {
            let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
            TicketRecord {
                trip: TripRequest {
                    date,
                    passenger_name: name.to_string(),
                    num_passengers: 2,
                    source: "Delhi".to_string(),
                    destination: "Agra".to_string(),
                },
                fare: 44,
                bus_number: "BUS-512".to_string(),
                seat_number: "S7".to_string(),
                expires_at: date.and_hms_opt(9, 5, 3).unwrap(),
                payment_qr_payload: format!("Payment for Rs.44 - {name}"),
                ticket_qr_payload: format!("Download Ticket for {name}"),
            }
        }

        #[test]
        fn valid_until_is_zero_padded_clock_time() {
            assert_eq!(record("Asha").valid_until(), "09:05:03");
        }

        #[test]
        fn pdf_filename_follows_passenger_name() {
            assert_eq!(record("Asha").pdf_filename(), "ticket_Asha.pdf");
        }

        #[test]
        fn pdf_filename_cannot_escape_output_directory() {
            let name = record("../../etc/passwd").pdf_filename();
            assert!(!name.contains('/'));
            assert!(name.starts_with("ticket_"));
            assert!(name.ends_with(".pdf"));
        }

        #[test]
        fn pdf_filename_fits_filesystem_limit() {
            let name = record(&"a".repeat(300)).pdf_filename();
            assert_eq!(name.len(), MAX_FILENAME_BYTES);
            assert!(name.starts_with("ticket_aaa"));
            assert!(name.ends_with(".pdf"));

            // multi-byte characters are never split
            let name = record(&"é".repeat(300)).pdf_filename();
            assert!(name.len() <= MAX_FILENAME_BYTES);
            assert!(name.ends_with("é.pdf"));
        }

        #[test]
        fn receipt_lists_every_field() {
            let text = record("Asha").receipt_text();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines[0], "");
            assert_eq!(lines[1], "E-Ticket Receipt");
            assert!(lines.contains(&"Date: 2026-10-19"));
            assert!(lines.contains(&"Passenger Name: Asha"));
            assert!(lines.contains(&"Bus Number: BUS-512"));
            assert!(lines.contains(&"Seat Number: S7"));
            assert!(lines.contains(&"Number of Passengers: 2"));
            assert!(lines.contains(&"From: Delhi"));
            assert!(lines.contains(&"To: Agra"));
            assert!(lines.contains(&"Fare: Rs.44"));
            assert!(lines.contains(&"Status: Paid"));
            assert_eq!(lines.last(), Some(&"Valid Until: 09:05:03"));
        }
    }
}

pub mod heartbeat {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Serialize, Debug, Clone)]
    pub struct Heartbeat {
        pub status: String,
    }

    impl Heartbeat {
        pub fn ok() -> Self {
            Self {
                status: "ok".to_string(),
            }
        }
    }
}
