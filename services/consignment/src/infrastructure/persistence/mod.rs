mod memory;

pub use memory::InMemoryConsignmentRepository;
