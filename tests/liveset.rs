mod common;

use montage_reader::montage::format::liveset;
use montage_reader::{Bank, MontageError, PerformanceSlot};

#[test]
fn payload_without_present_slots_has_no_pages() {
    let payload = common::live_set_payload(&[(0, "Named But Empty", vec![])]);
    assert!(liveset::decode(&payload).expect("decode").is_empty());
}

#[test]
fn payload_length_is_fixed() {
    for len in [0, common::LIVE_SET_DATA_LEN - 1, common::LIVE_SET_DATA_LEN + 1] {
        match liveset::decode(&vec![0u8; len]) {
            Err(MontageError::MalformedPayload {
                expected, found, ..
            }) => {
                assert_eq!(expected, common::LIVE_SET_DATA_LEN as u64);
                assert_eq!(found, len as u64);
            }
            other => panic!("expected MalformedPayload for {} bytes, got {:?}", len, other),
        }
    }
}

#[test]
fn pages_keep_order_and_slot_positions() {
    let payload = common::live_set_payload(&[
        (2, "Page3", vec![(4, 32, 9)]),
        (0, "Page1", vec![(0, 0, 0), (15, 46, 127)]),
        (1, "Skipped", vec![]),
        // Last slot of the last page ends exactly at the payload end.
        (15, "Last", vec![(15, 7, 3)]),
    ]);
    let pages = liveset::decode(&payload).expect("decode");

    let names: Vec<&str> = pages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Page1", "Page3", "Last"]);
    for page in &pages {
        assert_eq!(page.slots.len(), 16);
    }

    let first: Vec<usize> = pages[0].present_slots().map(|(i, _)| i).collect();
    assert_eq!(first, [0, 15]);
    assert_eq!(pages[0].slots[15].bank(), Bank::Library(1));
    assert_eq!(pages[0].slots[15].program_number(), 128);
    assert!(!pages[0].slots[1].present);

    let (index, slot) = pages[1].present_slots().next().expect("present slot");
    assert_eq!(index, 4);
    assert_eq!(slot.bank(), Bank::User(1));
    assert_eq!(slot.program_number(), 10);
    assert_eq!(slot.reserved, [0x11, 0x22]);
    assert_eq!(slot.raw(), [0x11, 32, 9, 0x22, 1]);

    assert_eq!(pages[2].slots[15].bank(), Bank::Preset(8));
    assert_eq!(pages[2].slots[15].program_number(), 4);
}

#[test]
fn any_nonzero_flag_means_present() {
    let mut payload = common::live_set_payload(&[]);
    let flag = common::FIRST_PAGE + common::SLOT_BASE + 3 * common::SLOT_STRIDE + 4;
    payload[flag] = 0x80;
    let pages = liveset::decode(&payload).expect("decode");
    assert_eq!(pages.len(), 1);
    assert!(pages[0].slots[3].present);
    assert_eq!(pages[0].name, "");
}

#[test]
fn bank_numbers_map_to_bank_names() {
    assert_eq!(Bank::from_number(1).to_string(), "PRE1");
    assert_eq!(Bank::from_number(8).to_string(), "PRE8");
    assert_eq!(Bank::from_number(32), Bank::Unknown(32));
    assert_eq!(Bank::from_number(33).to_string(), "USR1");
    assert_eq!(Bank::from_number(37).to_string(), "USR5");
    assert_eq!(Bank::from_number(38), Bank::Unknown(38));
    assert_eq!(Bank::from_number(47).to_string(), "LIB1");
    assert_eq!(Bank::from_number(54).to_string(), "LIB8");
    assert_eq!(Bank::from_number(55), Bank::Unknown(55));
    assert_eq!(Bank::from_number(200).to_string(), "???");
}

#[test]
fn slot_bank_and_program_are_one_based() {
    let slot = PerformanceSlot {
        reserved: [0, 0],
        bank_index: 255,
        program_index: 255,
        present: true,
    };
    assert_eq!(slot.bank(), Bank::Unknown(256));
    assert_eq!(slot.program_number(), 256);

    let first = PerformanceSlot {
        bank_index: 0,
        program_index: 0,
        ..slot
    };
    assert_eq!(format!("{:5}{:3}", first.bank(), first.program_number()), "PRE1   1");
}
