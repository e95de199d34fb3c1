//! Interactive menu shell for the reservation desk.
//!
//! Presents the operator menu, collects and validates input, and formats the
//! display-ready data the core returns. All prompting and re-prompting lives
//! here; the core never reads the terminal.

use chrono::NaiveDate;
use frontdesk::desk::CancelOutcome;
use frontdesk::types::{Booking, BookingId, BookingStatus, Room};
use frontdesk::{Config, FlatFileStore, FrontDesk};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontdesk=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        rooms_file = %config.rooms_file.display(),
        bookings_file = %config.bookings_file.display(),
        "configuration loaded"
    );

    let store = FlatFileStore::new(&config.rooms_file, &config.bookings_file);
    let mut desk = FrontDesk::open(store, config.payment.gateway());

    let stdin = io::stdin();
    let mut prompter = Prompter {
        input: stdin.lock(),
    };
    loop {
        print_menu();
        let Some(choice) = prompter.line("Choose option: ") else {
            break;
        };
        let outcome = match choice.as_str() {
            "1" => {
                list_rooms(&desk);
                Some(())
            }
            "2" => search_and_book(&mut desk, &mut prompter),
            "3" => cancel_booking(&mut desk, &mut prompter),
            "4" => view_booking(&desk, &mut prompter),
            "5" => {
                list_bookings(&desk);
                Some(())
            }
            "6" => {
                save_and_exit(&desk);
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
                Some(())
            }
        };
        // None means stdin closed mid-flow.
        if outcome.is_none() {
            break;
        }
    }
}

/// Line-oriented prompt helper; every method returns `None` once stdin closes.
struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let mut buffer = String::new();
        match self.input.read_line(&mut buffer) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buffer.trim().to_string()),
        }
    }

    fn required(&mut self, prompt: &str) -> Option<String> {
        loop {
            let value = self.line(prompt)?;
            if value.is_empty() {
                println!("A value is required.");
            } else {
                return Some(value);
            }
        }
    }

    fn date(&mut self, prompt: &str) -> Option<NaiveDate> {
        loop {
            let value = self.line(prompt)?;
            match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
                Ok(date) => return Some(date),
                Err(_) => println!("Invalid date format. Use yyyy-MM-dd (example: 2025-12-01)."),
            }
        }
    }

    fn index(&mut self, prompt: &str) -> Option<usize> {
        loop {
            let value = self.line(prompt)?;
            match value.parse() {
                Ok(number) => return Some(number),
                Err(_) => println!("Enter a valid integer."),
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Option<bool> {
        Some(self.line(prompt)?.eq_ignore_ascii_case("yes"))
    }
}

fn print_menu() {
    println!("\n===== HOTEL BOOKING SYSTEM =====");
    println!("1) List all rooms");
    println!("2) Search rooms and make reservation");
    println!("3) Cancel a reservation");
    println!("4) View booking details");
    println!("5) List all bookings");
    println!("6) Save & Exit");
}

fn list_rooms(desk: &FrontDesk) {
    println!("\nRooms:");
    for room in desk.rooms() {
        println!(" - {}", format_room(room));
    }
}

fn search_and_book(desk: &mut FrontDesk, prompter: &mut Prompter<impl BufRead>) -> Option<()> {
    let category = prompter.line("Enter category to search (Standard/Deluxe/Suite or ALL): ")?;
    let check_in = prompter.date("Enter check-in date (yyyy-MM-dd): ")?;
    let checkout = prompter.date("Enter check-out date (yyyy-MM-dd): ")?;

    let available = match desk.search(&category, check_in, checkout) {
        Ok(rooms) => rooms,
        Err(error) => {
            println!("Invalid dates. {error}.");
            return Some(());
        }
    };
    if available.is_empty() {
        println!("No rooms available for given criteria.");
        return Some(());
    }

    println!("\nAvailable rooms:");
    for (index, room) in available.iter().enumerate() {
        println!(
            "{}) {}  (Total for stay: {})",
            index + 1,
            format_room(room),
            desk.quote(room, check_in, checkout)
        );
    }

    let choice = prompter.index("Choose room number to book (or 0 to cancel): ")?;
    if choice == 0 || choice > available.len() {
        println!("Booking cancelled by user.");
        return Some(());
    }
    let room = available[choice - 1];
    let total = desk.quote(room, check_in, checkout);
    let room_id = room.id.clone();

    let guest_name = prompter.required("Guest name: ")?;
    let guest_phone = prompter.required("Guest phone: ")?;

    println!("\nBooking summary:");
    println!("Room: {room_id}");
    println!("Guest: {guest_name}");
    println!("Phone: {guest_phone}");
    println!("From: {check_in} To: {checkout} (check-out)");
    println!("Total: {total}");
    if !prompter.confirm(&format!("\nProceed to payment of {total}? (yes/no): "))? {
        println!("Payment cancelled. Booking not completed.");
        return Some(());
    }

    match desk.create_booking(&room_id, &guest_name, &guest_phone, check_in, checkout) {
        Ok(booking) if booking.status == BookingStatus::Booked => {
            println!(
                "Payment successful. Booking confirmed! Your Booking ID: {}",
                booking.id
            );
        }
        Ok(_) => {
            println!("Payment failed. Booking created with status PAYMENT_FAILED. Try again later.");
        }
        Err(error) => println!("{error}"),
    }
    Some(())
}

fn cancel_booking(desk: &mut FrontDesk, prompter: &mut Prompter<impl BufRead>) -> Option<()> {
    let text = prompter.line("Enter Booking ID to cancel: ")?;
    let Some(id) = BookingId::parse(&text) else {
        println!("Booking not found.");
        return Some(());
    };
    let Some(booking) = desk.find_by_id(&id) else {
        println!("Booking not found.");
        return Some(());
    };
    println!("Booking found:\n{}", format_booking(booking));
    if booking.status == BookingStatus::Cancelled {
        println!("Booking is already cancelled.");
        return Some(());
    }
    if !prompter.confirm("Confirm cancellation? (yes/no): ")? {
        println!("Cancellation aborted.");
        return Some(());
    }
    match desk.cancel(&id) {
        Ok(CancelOutcome::Cancelled) => println!("Booking cancelled successfully."),
        Ok(CancelOutcome::AlreadyCancelled) => println!("Booking is already cancelled."),
        Err(error) => println!("{error}"),
    }
    Some(())
}

fn view_booking(desk: &FrontDesk, prompter: &mut Prompter<impl BufRead>) -> Option<()> {
    let option = prompter.line("Search by (1) Booking ID or (2) Guest name: ")?;
    if option == "1" {
        let text = prompter.line("Enter Booking ID: ")?;
        match BookingId::parse(&text).and_then(|id| desk.find_by_id(&id)) {
            Some(booking) => println!("\n{}", format_booking(booking)),
            None => println!("Not found."),
        }
    } else {
        let name = prompter.line("Enter guest name (partial allowed): ")?;
        let found = desk.find_by_guest(&name);
        if found.is_empty() {
            println!("No bookings found for that name.");
        } else {
            println!("Results:");
            for booking in found {
                println!("--------------------");
                println!("{}", format_booking(booking));
            }
        }
    }
    Some(())
}

fn list_bookings(desk: &FrontDesk) {
    if desk.bookings().is_empty() {
        println!("No bookings yet.");
        return;
    }
    println!("\nAll bookings:");
    for booking in desk.bookings() {
        println!("--------------------");
        println!("{}", format_booking(booking));
    }
}

fn save_and_exit(desk: &FrontDesk) {
    match desk.save() {
        Ok(()) => println!("Data saved. Exiting."),
        Err(error) => println!("Failed to save bookings: {error}. Exiting without a final save."),
    }
}

fn format_room(room: &Room) -> String {
    format!(
        "{} | {} | {} / night",
        room.id, room.category, room.price_per_night
    )
}

fn format_booking(booking: &Booking) -> String {
    format!(
        "BookingID: {}\nRoom: {}\nGuest: {}\nPhone: {}\nFrom: {} To: {}\nTotal: {}\nStatus: {}",
        booking.id,
        booking.room_id,
        booking.guest_name,
        booking.guest_phone,
        booking.stay.first_night(),
        booking.stay.last_night(),
        booking.total_price,
        booking.status
    )
}
