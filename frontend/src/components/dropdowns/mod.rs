mod writing;

pub use writing::DropdownWriting;
