//! End-to-end cart and checkout scenarios against an in-memory store.

use std::cell::RefCell;
use std::rc::Rc;

use storecart_cache::{Cache, MemoryStore};
use storecart_core::prelude::*;
use storecart_observability::StructuredLogger;

#[derive(Default)]
struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

impl RecordingNotifier {
    fn texts(&self) -> Vec<String> {
        self.notices.borrow().iter().map(ToString::to_string).collect()
    }
}

#[derive(Default)]
struct RecordingChannel {
    sent: RefCell<Vec<OrderMessage>>,
    fail: bool,
}

impl OrderChannel for RecordingChannel {
    fn dispatch(&self, message: &OrderMessage) -> Result<(), ChannelError> {
        if self.fail {
            return Err(ChannelError::Unavailable("popup blocked".to_string()));
        }
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

fn open_cart(backend: &MemoryStore) -> CartStore<MemoryStore> {
    CartStore::open(
        Cache::new(backend.clone()),
        "cart",
        StructuredLogger::disabled(),
    )
}

fn checkout() -> Checkout {
    Checkout::new(Currency::INR, StructuredLogger::disabled())
}

fn filled_form() -> CustomerDetails {
    CustomerDetails::new("Asha Rao", "9876543210", "12 MG Road, Shimla")
}

#[test]
fn test_tea_scenario() {
    let backend = MemoryStore::new();
    let mut cart = open_cart(&backend);
    assert!(cart.is_empty());

    cart.add_item("Tea", Money::from_major(20));
    assert_eq!(cart.items(), &[LineItem::new("Tea", Money::from_major(20))]);
    assert_eq!(cart.total(), Money::from_major(20));

    cart.add_item("Tea", Money::from_major(20));
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("Tea").unwrap().quantity, 2);
    assert_eq!(cart.total(), Money::from_major(40));

    cart.set_quantity("Tea", 0);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Money::ZERO);

    // Storage agrees with memory after every step
    assert!(open_cart(&backend).is_empty());
}

#[test]
fn test_repeated_adds_make_one_line() {
    let mut cart = open_cart(&MemoryStore::new());
    for n in 1..=25u32 {
        cart.add_item("Samosa", Money::from_major(15));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("Samosa").unwrap().quantity, n);
    }
    assert_eq!(cart.total(), Money::from_major(15 * 25));
}

#[test]
fn test_total_matches_line_sum() {
    let mut cart = open_cart(&MemoryStore::new());
    cart.add_item("Tea", Money::from_major(20));
    cart.add_item("Coffee", Money::from_minor(3550));
    cart.add_item("Biscuit", Money::from_minor(999));
    cart.set_quantity("Coffee", 3);
    cart.add_item("Tea", Money::from_major(20));

    let expected: i64 = cart
        .items()
        .iter()
        .map(|i| i.unit_price.amount_minor() * i64::from(i.quantity))
        .sum();
    assert_eq!(cart.total().amount_minor(), expected);
    assert_eq!(expected, 4000 + 10650 + 999);
}

#[test]
fn test_non_positive_quantity_always_removes() {
    for q in [0, -1, -100, i64::MIN] {
        let mut cart = open_cart(&MemoryStore::new());
        cart.add_item("Tea", Money::from_major(20));
        cart.add_item("Samosa", Money::from_major(15));
        cart.set_quantity("Tea", q);
        assert!(cart.get("Tea").is_none(), "quantity {}", q);
        assert!(cart.get("Samosa").is_some());
    }
}

#[test]
fn test_remove_missing_keeps_order() {
    let mut cart = open_cart(&MemoryStore::new());
    cart.add_item("C", Money::from_major(3));
    cart.add_item("A", Money::from_major(1));
    cart.add_item("B", Money::from_major(2));
    let before = cart.items().to_vec();

    cart.remove_item("Z");
    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn test_reload_yields_equal_cart() {
    let backend = MemoryStore::new();
    let mut cart = open_cart(&backend);
    cart.add_item("Tea", Money::from_major(20));
    cart.add_item("Kachori", Money::from_minor(1250));
    cart.add_item("Tea", Money::from_major(20));
    cart.add_item("Lassi", Money::from_major(40));
    cart.remove_item("Kachori");

    let reloaded = open_cart(&backend);
    assert_eq!(reloaded.items(), cart.items());
}

#[test]
fn test_reads_cart_written_by_page_script() {
    let backend = MemoryStore::new();
    storecart_cache::KvStore::set(
        &backend,
        "cart",
        r#"[{"name":"Tea","price":20,"quantity":2},{"name":"Samosa","price":15.5,"quantity":1}]"#,
    )
    .unwrap();

    let cart = open_cart(&backend);
    assert_eq!(cart.len(), 2);
    assert_eq!(cart.total(), Money::from_minor(5550));
}

#[test]
fn test_null_quantity_from_page_script_drops_only_that_line() {
    // A garbled quantity field was saved as NaN, which JSON writes as null
    let backend = MemoryStore::new();
    storecart_cache::KvStore::set(
        &backend,
        "cart",
        r#"[{"name":"Tea","price":20,"quantity":3},{"name":"Samosa","price":15,"quantity":null}]"#,
    )
    .unwrap();

    let mut cart = open_cart(&backend);
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get("Tea").unwrap().quantity, 3);
    assert!(cart.get("Samosa").is_none());

    // The next write leaves only well-formed lines behind
    cart.add_item("Tea", Money::from_major(20));
    let reloaded = open_cart(&backend);
    assert_eq!(reloaded.items(), cart.items());
    assert_eq!(reloaded.total(), Money::from_major(80));
}

#[test]
fn test_checkout_with_missing_name() {
    let backend = MemoryStore::new();
    let mut cart = open_cart(&backend);
    cart.add_item("Tea", Money::from_major(20));
    let items_before = cart.items().to_vec();

    let mut form = CustomerDetails::new("", "9876543210", "12 MG Road");
    let form_before = form.clone();
    let channel = RecordingChannel::default();
    let notifier = RecordingNotifier::default();

    let result = checkout().submit(&mut cart, &mut form, &channel, &notifier);

    assert_eq!(result, Err(CheckoutError::MissingDetails(vec!["name"])));
    assert_eq!(cart.items(), items_before.as_slice());
    assert_eq!(open_cart(&backend).items(), items_before.as_slice());
    assert_eq!(form, form_before);
    assert!(channel.sent.borrow().is_empty());
    assert_eq!(notifier.texts(), vec!["Please fill in all customer details"]);
}

#[test]
fn test_checkout_fields_checked_before_empty_cart() {
    let mut cart = open_cart(&MemoryStore::new());
    let mut form = CustomerDetails::default();
    let channel = RecordingChannel::default();
    let notifier = RecordingNotifier::default();

    let result = checkout().submit(&mut cart, &mut form, &channel, &notifier);
    assert!(matches!(result, Err(CheckoutError::MissingDetails(_))));
    assert_eq!(notifier.notices.borrow().as_slice(), &[Notice::MissingCustomerDetails]);
}

#[test]
fn test_checkout_with_empty_cart() {
    let mut cart = open_cart(&MemoryStore::new());
    let mut form = filled_form();
    let channel = RecordingChannel::default();
    let notifier = RecordingNotifier::default();

    let result = checkout().submit(&mut cart, &mut form, &channel, &notifier);

    assert_eq!(result, Err(CheckoutError::EmptyCart));
    assert_eq!(form, filled_form());
    assert!(channel.sent.borrow().is_empty());
    assert_eq!(notifier.texts(), vec!["Your cart is empty"]);
}

#[test]
fn test_successful_checkout() {
    let backend = MemoryStore::new();
    let mut cart = open_cart(&backend);
    cart.add_item("Tea", Money::from_major(20));
    cart.add_item("Tea", Money::from_major(20));
    cart.add_item("Samosa", Money::from_major(15));
    cart.add_item("Jalebi", Money::from_minor(2250));
    cart.set_quantity("Jalebi", 2);

    let mut form = filled_form();
    let channel = RecordingChannel::default();
    let notifier = RecordingNotifier::default();

    let summary = checkout()
        .submit(&mut cart, &mut form, &channel, &notifier)
        .unwrap();

    let sent = channel.sent.borrow();
    assert_eq!(sent.len(), 1);
    let text = sent[0].as_str();
    assert!(text.contains(&format!("*New Order #{}*", summary.order_number)));
    assert!(text.contains("Name: Asha Rao"));
    assert!(text.contains("Phone: 9876543210"));
    assert!(text.contains("Address: 12 MG Road, Shimla"));
    assert!(text.contains("\u{2022} Tea x 2 = \u{20b9}40"));
    assert!(text.contains("\u{2022} Samosa x 1 = \u{20b9}15"));
    assert!(text.contains("\u{2022} Jalebi x 2 = \u{20b9}45"));
    assert!(text.contains("*Total Amount: \u{20b9}100*"));

    assert_eq!(summary.total, Money::from_major(100));
    assert_eq!(summary.lines.len(), 3);

    assert!(cart.is_empty());
    assert!(open_cart(&backend).is_empty());
    assert_eq!(form, CustomerDetails::default());
    assert_eq!(notifier.texts(), vec!["Order sent successfully!"]);
}

#[test]
fn test_channel_failure_keeps_cart_and_form() {
    let backend = MemoryStore::new();
    let mut cart = open_cart(&backend);
    cart.add_item("Tea", Money::from_major(20));

    let mut form = filled_form();
    let channel = RecordingChannel {
        fail: true,
        ..RecordingChannel::default()
    };
    let notifier = RecordingNotifier::default();

    let result = checkout().submit(&mut cart, &mut form, &channel, &notifier);

    assert!(matches!(result, Err(CheckoutError::Channel(_))));
    assert_eq!(cart.len(), 1);
    assert_eq!(open_cart(&backend).len(), 1);
    assert_eq!(form, filled_form());
    assert_eq!(notifier.notices.borrow().as_slice(), &[Notice::ChannelUnavailable]);
}

#[test]
fn test_checkout_clears_through_listeners() {
    #[derive(Default)]
    struct Renders(RefCell<Vec<usize>>);

    impl CartListener for Renders {
        fn cart_changed(&self, items: &[LineItem], _total: Money) {
            self.0.borrow_mut().push(items.len());
        }
    }

    let renders = Rc::new(Renders::default());
    let mut cart = open_cart(&MemoryStore::new()).with_listener(renders.clone());
    cart.add_item("Tea", Money::from_major(20));

    let mut form = filled_form();
    checkout()
        .submit(
            &mut cart,
            &mut form,
            &RecordingChannel::default(),
            &SilentNotifier,
        )
        .unwrap();

    assert_eq!(renders.0.borrow().as_slice(), &[1, 0]);
}
