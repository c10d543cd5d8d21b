use super::common::BuildArgs;

pub struct CheckArgs {
    pub build: BuildArgs,
}

pub fn run(args: CheckArgs) {
    args.build.build_or_exit();
    // Silent on success (like cargo check)
}
