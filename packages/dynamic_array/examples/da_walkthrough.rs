//! Walks through the capacity policy of `DynamicArray`, printing the logical elements and the
//! full underlying buffer after every step:
//!
//! * Filling the elements through the raw buffer.
//! * Appending and removing at the end.
//! * Resizing up, down in place and down with reallocation.
//! * Inserting in the middle.

use std::fmt::Display;

use dynamic_array::DynamicArray;

fn main() {
    let mut array = DynamicArray::<i32>::with_size(2);
    println!("{array}\n");

    // Slice utilities can operate on the raw buffer as long as they are told the logical size.
    let size = array.size();
    array.raw_buffer_mut()[..size].fill(7);
    print_arrays(&array);

    heading("Push back 6 times");
    for value in 0..6 {
        array.push_back(value).unwrap();
        print_arrays(&array);
    }

    heading("Pop back 6 times");
    for _ in 0..6 {
        let value = array.pop_back().unwrap();
        println!("Popped {value}");
        print_arrays(&array);
    }

    for new_size in [10, 3, 2] {
        heading(&format!("Set size = {new_size}"));
        array.resize(new_size).unwrap();
        print_arrays(&array);
    }

    heading("Insert -8 at index 1");
    array.insert(1, -8).unwrap();
    print_arrays(&array);
}

fn heading(text: &str) {
    println!("{text}:\n");
}

fn print_arrays<T: Display>(array: &DynamicArray<T>) {
    println!(
        " Dynamic array [{:02}]: {}",
        array.size(),
        join(array.iter())
    );
    println!(
        "Internal array [{:02}]: {}\n",
        array.capacity(),
        join(array.raw_buffer())
    );
}

fn join<'a, T: Display + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
