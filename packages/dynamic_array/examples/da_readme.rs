//! The example from the `dynamic_array` package documentation.

use dynamic_array::DynamicArray;

fn main() {
    let mut array = DynamicArray::<i32>::with_size(2);
    println!("{array}");

    array.push_back(5).unwrap();
    array.insert(0, -1).unwrap();
    println!("Elements: {:?}", array.as_slice());

    let last = array.pop_back().unwrap();
    println!("Removed {last}, now {array}");

    // Positions past the logical size are not addressable, even if the capacity covers them.
    if let Err(e) = array.get(3) {
        println!("Expected failure: {e}");
    }
}
