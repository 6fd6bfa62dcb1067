pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod courses {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
        }
        pub mod course;
        pub mod use_cases {
            pub mod enroll_student {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod unenroll_student {
                pub mod command;
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_course {
                pub mod projection;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
