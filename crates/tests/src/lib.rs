pub mod fixtures;

#[cfg(test)]
mod notification_tests;
#[cfg(test)]
mod poller_tests;
#[cfg(test)]
mod profile_tests;
