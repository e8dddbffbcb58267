use crate::mangle::mangle;
use crate::resource::ResourceList;
use color_print::{cformat, cprintln};

pub fn print_dump(resources: &ResourceList) {
    println!("+-----------+------------------------+------------------------+-------------");
    println!(
        "| {:>9} | {:<22} | {:<22} | {}",
        "size", "alias", "symbol", "path"
    );
    println!("+-----------+------------------------+------------------------+-------------");
    for entry in resources {
        let size = match std::fs::metadata(&entry.path) {
            Ok(meta) => format!("{:>9}", meta.len()),
            Err(_) => cformat!("<r,s>{:>9}</>", "??"),
        };
        cprintln!(
            "| {} | <g>{:<22}</> | <c>{:<22}</> | {}",
            size,
            entry.alias,
            mangle(&entry.alias),
            entry.path.display()
        );
    }
    println!("+-----------+------------------------+------------------------+-------------");
}
