pub mod company;
pub mod customer;
pub mod employee;
pub mod job;
pub mod time_entry;

pub use company::Company;
pub use customer::Customer;
pub use employee::Employee;
pub use job::Job;
pub use time_entry::TimeEntry;
