use builder_framework::{Builder, BuilderHandle, Director, DirectorError, RecipeBook, Retrieve};

// --- Test Builder ---

#[derive(Clone, Copy, Debug, PartialEq)]
enum GadgetStep {
    Frame,
    Motor,
    Shell,
}

#[derive(Debug, Default)]
struct GadgetBuilder {
    parts: Vec<&'static str>,
}

impl Builder for GadgetBuilder {
    type Step = GadgetStep;

    fn apply(&mut self, step: &GadgetStep) {
        self.parts.push(match step {
            GadgetStep::Frame => "frame",
            GadgetStep::Motor => "motor",
            GadgetStep::Shell => "shell",
        });
    }
}

impl Retrieve for GadgetBuilder {
    type Output = Vec<&'static str>;

    fn output(&self) -> &Self::Output {
        &self.parts
    }

    fn reset(&mut self) {
        self.parts.clear();
    }

    fn take(&mut self) -> Self::Output {
        std::mem::take(&mut self.parts)
    }
}

fn standard_recipes() -> RecipeBook<GadgetStep> {
    RecipeBook::new()
        .with("bare", vec![GadgetStep::Frame])
        .with(
            "complete",
            vec![GadgetStep::Frame, GadgetStep::Motor, GadgetStep::Shell],
        )
}

// --- Tests ---

#[test]
fn recipe_steps_apply_in_declared_order() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    director.run_recipe("complete").unwrap();

    assert_eq!(handle.take(), vec!["frame", "motor", "shell"]);
}

#[test]
fn running_a_recipe_matches_manual_step_application() {
    // Director-driven
    let via_director = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&via_director);
    director.run_recipe("bare").unwrap();

    // Manual
    let by_hand = BuilderHandle::new(GadgetBuilder::default());
    by_hand.apply(&GadgetStep::Frame);

    assert_eq!(via_director.take(), by_hand.take());
}

#[test]
fn take_resets_the_builder_for_the_next_cycle() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    director.run_recipe("complete").unwrap();
    assert_eq!(handle.take(), vec!["frame", "motor", "shell"]);

    // Taking again without building yields an empty output.
    assert!(handle.take().is_empty());

    // The next cycle starts from scratch, with no residue.
    director.run_recipe("bare").unwrap();
    assert_eq!(handle.take(), vec!["frame"]);
}

#[test]
fn with_output_inspects_without_consuming() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    handle.apply(&GadgetStep::Frame);
    handle.apply(&GadgetStep::Motor);

    let seen = handle.with_output(|parts| parts.len());
    assert_eq!(seen, 2);

    // Inspection lost nothing.
    assert_eq!(handle.take(), vec!["frame", "motor"]);
}

#[test]
fn explicit_reset_discards_the_build_in_progress() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    handle.apply(&GadgetStep::Shell);

    handle.reset();

    assert!(handle.take().is_empty());
}

#[test]
fn direct_and_recipe_steps_interleave_on_one_build() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    handle.apply(&GadgetStep::Shell);
    director.run_recipe("bare").unwrap();
    handle.apply(&GadgetStep::Motor);

    assert_eq!(handle.take(), vec!["shell", "frame", "motor"]);
}

#[test]
fn unknown_recipe_fails_even_when_attached() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    let err = director.run_recipe("bogus").unwrap_err();
    assert!(matches!(err, DirectorError::UnknownRecipe(name) if name == "bogus"));

    // Nothing was applied.
    assert!(handle.take().is_empty());
}

#[test]
fn unknown_recipe_fails_when_unattached_too() {
    let director: Director<GadgetBuilder> = Director::new(standard_recipes());

    let err = director.run_recipe("bogus").unwrap_err();
    assert!(matches!(err, DirectorError::UnknownRecipe(_)));
}

#[test]
fn running_unattached_is_a_surfaced_error() {
    let director: Director<GadgetBuilder> = Director::new(standard_recipes());
    assert!(!director.is_attached());

    let err = director.run_recipe("complete").unwrap_err();
    assert!(matches!(err, DirectorError::Unattached));
}

#[test]
fn detach_returns_the_director_to_unattached() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);
    assert!(director.is_attached());

    director.detach();

    assert!(!director.is_attached());
    assert!(matches!(
        director.run_recipe("bare").unwrap_err(),
        DirectorError::Unattached
    ));
}

#[test]
fn dropping_the_handle_detaches_implicitly() {
    let mut director = Director::new(standard_recipes());
    {
        let handle = BuilderHandle::new(GadgetBuilder::default());
        director.attach(&handle);
        assert!(director.is_attached());
    }

    // The director never owned the builder; its reference is now dead.
    assert!(!director.is_attached());
    assert!(matches!(
        director.run_recipe("bare").unwrap_err(),
        DirectorError::Unattached
    ));
}

#[test]
fn attaching_a_new_builder_replaces_the_old_one() {
    let first = BuilderHandle::new(GadgetBuilder::default());
    let second = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());

    director.attach(&first);
    director.run_recipe("complete").unwrap();

    director.attach(&second);
    director.run_recipe("bare").unwrap();

    // Each builder saw only its own steps.
    assert_eq!(first.take(), vec!["frame", "motor", "shell"]);
    assert_eq!(second.take(), vec!["frame"]);
}

#[test]
fn new_recipes_extend_the_director_without_code_changes() {
    let handle = BuilderHandle::new(GadgetBuilder::default());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    director.add_recipe("motorized", vec![GadgetStep::Motor, GadgetStep::Motor]);
    assert!(director.recipes().contains("motorized"));

    director.run_recipe("motorized").unwrap();
    assert_eq!(handle.take(), vec!["motor", "motor"]);
}

#[test]
fn recording_builder_traces_director_runs() {
    use builder_framework::mock::Recording;

    let mut recording = Recording::new();
    recording.expect_steps(vec![GadgetStep::Frame, GadgetStep::Motor, GadgetStep::Shell]);

    let handle = BuilderHandle::new(recording.builder());
    let mut director = Director::new(standard_recipes());
    director.attach(&handle);

    director.run_recipe("complete").unwrap();
    recording.verify();
}
