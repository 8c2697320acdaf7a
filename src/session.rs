use larder_mealplan::{MAX_PLAN_RECIPES, MealPlan, MealSlot, PlanDay, PlannedMeal};
use larder_recipe::{Difficulty, Recipe, SortOption, sort_recipes};
use larder_shared::today;
use larder_shopping::{MergeOutcome, ShoppingList, ShoppingListItem, consolidate};
use larder_spoonacular::{ApiError, Client, Diet, SearchQuery, Timeout};
use larder_store::{AdvancedFilters, Favorites, JsonStore, Preferences, SearchHistory, Theme};
use time::Date;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Tag asked for when fetching random recipes.
pub const RANDOM_TAGS: &str = "main course";
pub const RANDOM_RESULTS: u32 = 12;

/// One-off search filters layered over the saved advanced filters.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub diet: Option<Diet>,
    pub cuisine: Option<String>,
    pub max_ready_time: Option<u32>,
    pub sort: Option<String>,
}

/// Network work run off the control loop.
#[derive(Debug, Clone)]
pub enum Job {
    Search(SearchOptions),
    Random,
    Category(String),
    Favorites,
    Detail(u64),
    ShoppingFromFavorites,
    ShoppingFromPlan,
    GeneratePlan,
}

impl Job {
    pub fn name(&self) -> &'static str {
        match self {
            Job::Search(_) => "search",
            Job::Random => "random",
            Job::Category(_) => "category",
            Job::Favorites => "favorites",
            Job::Detail(_) => "detail",
            Job::ShoppingFromFavorites => "shopping from favorites",
            Job::ShoppingFromPlan => "shopping from plan",
            Job::GeneratePlan => "meal plan",
        }
    }

    /// Listing jobs replace the current result list; only the latest counts.
    pub fn is_listing(&self) -> bool {
        matches!(
            self,
            Job::Search(_) | Job::Random | Job::Category(_) | Job::Favorites
        )
    }
}

#[derive(Debug)]
pub enum Payload {
    Listing(Vec<Recipe>),
    Detail(Box<Recipe>),
    Shopping(Vec<Recipe>),
    Plan { start: Date, recipes: Vec<Recipe> },
}

/// Result of a [`Job`], sent back to the control loop.
#[derive(Debug)]
pub struct Outcome {
    pub ticket: u64,
    pub job: &'static str,
    pub listing: bool,
    pub result: Result<Payload, ApiError>,
}

/// What applying an [`Outcome`] changed.
#[derive(Debug)]
pub enum Event {
    Listing { job: &'static str, count: usize },
    Detail(Box<Recipe>),
    ShoppingUpdated(MergeOutcome),
    PlanGenerated { start: Date, days: usize },
    Stale { ticket: u64 },
    Failed { job: &'static str, message: String },
}

/// Owns every piece of mutable state. Jobs run on tokio tasks and only
/// report back through the outcome channel; state is touched solely by
/// [`Session::apply`] and the local operations.
pub struct Session {
    client: Client,
    store: JsonStore,
    favorites: Favorites,
    history: SearchHistory,
    meal_plan: MealPlan,
    shopping_list: ShoppingList,
    preferences: Preferences,
    ingredients: Vec<String>,
    recipes: Vec<Recipe>,
    next_ticket: u64,
    listing_ticket: u64,
    tx: UnboundedSender<Outcome>,
    rx: UnboundedReceiver<Outcome>,
}

impl Session {
    pub fn open(client: Client, store: JsonStore) -> Self {
        let (tx, rx) = unbounded_channel();

        let session = Self {
            favorites: store.load(),
            history: store.load(),
            meal_plan: store.load(),
            shopping_list: store.load(),
            preferences: store.load(),
            client,
            store,
            ingredients: vec![],
            recipes: vec![],
            next_ticket: 0,
            listing_ticket: 0,
            tx,
            rx,
        };

        tracing::debug!(
            dir = %session.store.dir().display(),
            favorites = session.favorites.len(),
            plan_days = session.meal_plan.len(),
            shopping_items = session.shopping_list.len(),
            "session opened"
        );

        session
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn meal_plan(&self) -> &MealPlan {
        &self.meal_plan
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn has_api_key(&self) -> bool {
        self.client.has_api_key()
    }

    /// Start `job` on a worker task and return its ticket.
    ///
    /// Returns `Ok(None)` when there is nothing to fetch: no favorites for a
    /// favorites listing, shopping list or plan, or an empty meal plan.
    pub fn spawn(&mut self, job: Job) -> larder_shared::Result<Option<u64>> {
        let client = self.client.clone();

        let task = match &job {
            Job::Search(options) => {
                if self.ingredients.is_empty() {
                    larder_shared::invalid!("Please add at least one ingredient");
                }

                let query = self.search_query(options);
                Task::Search(query)
            }
            Job::Random => Task::Random,
            Job::Category(category) => Task::Category(category.to_owned()),
            Job::Detail(id) => Task::Detail(*id),
            Job::Favorites | Job::ShoppingFromFavorites if self.favorites.is_empty() => {
                tracing::info!(job = job.name(), "no favorites, nothing to do");
                return Ok(None);
            }
            Job::Favorites => Task::Favorites(self.favorites.ids().to_vec()),
            Job::ShoppingFromFavorites => Task::Shopping(self.favorites.ids().to_vec()),
            Job::ShoppingFromPlan => {
                let ids: Vec<u64> = self.meal_plan.recipe_ids().into_iter().collect();
                if ids.is_empty() {
                    tracing::info!(job = job.name(), "meal plan is empty, nothing to do");
                    return Ok(None);
                }

                Task::Shopping(ids)
            }
            Job::GeneratePlan => {
                if self.favorites.is_empty() {
                    tracing::info!(job = job.name(), "no favorites, nothing to do");
                    return Ok(None);
                }

                Task::Plan(today(), self.favorites.first(MAX_PLAN_RECIPES).to_vec())
            }
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        if job.is_listing() {
            self.listing_ticket = ticket;
        }

        let tx = self.tx.clone();
        let name = job.name();
        let listing = job.is_listing();

        tracing::debug!(ticket, job = name, "job started");

        tokio::spawn(async move {
            let result = task.run(&client).await;
            let outcome = Outcome {
                ticket,
                job: name,
                listing,
                result,
            };

            // the session is gone when sending fails; nobody wants the result
            let _ = tx.send(outcome);
        });

        Ok(Some(ticket))
    }

    /// Wait for the next finished job.
    pub async fn next_outcome(&mut self) -> Option<Outcome> {
        self.rx.recv().await
    }

    /// Spawn `job` and apply its outcome, for callers that have nothing else
    /// to do meanwhile.
    pub async fn run(&mut self, job: Job) -> larder_shared::Result<Option<Event>> {
        let Some(ticket) = self.spawn(job)? else {
            return Ok(None);
        };

        while let Some(outcome) = self.next_outcome().await {
            if outcome.ticket == ticket {
                return Ok(Some(self.apply(outcome)));
            }

            self.apply(outcome);
        }

        larder_shared::bail!("job {ticket} never reported back")
    }

    pub fn apply(&mut self, outcome: Outcome) -> Event {
        let Outcome {
            ticket,
            job,
            listing,
            result,
        } = outcome;

        if listing && ticket < self.listing_ticket {
            tracing::debug!(ticket, latest = self.listing_ticket, job, "stale result dropped");
            return Event::Stale { ticket };
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(ticket, job, error = %err, "job failed");
                return Event::Failed {
                    job,
                    message: err.to_string(),
                };
            }
        };

        match payload {
            Payload::Listing(mut recipes) => {
                self.filter_by_difficulty(&mut recipes);
                self.recipes = recipes;

                Event::Listing {
                    job,
                    count: self.recipes.len(),
                }
            }
            Payload::Detail(recipe) => Event::Detail(recipe),
            Payload::Shopping(recipes) => {
                let outcome = self.shopping_list.merge(consolidate(&recipes));
                if outcome.added > 0 {
                    self.store.persist(&self.shopping_list);
                }

                tracing::info!(
                    consolidated = outcome.consolidated,
                    added = outcome.added,
                    "shopping list updated"
                );

                Event::ShoppingUpdated(outcome)
            }
            Payload::Plan { start, recipes } => {
                let meals: Vec<PlannedMeal> = recipes.iter().map(PlannedMeal::from).collect();
                let days = match self.meal_plan.auto_generate(start, &meals) {
                    Ok(days) => days,
                    Err(err) => {
                        tracing::warn!(ticket, job, error = %err, "meal plan not generated");
                        return Event::Failed {
                            job,
                            message: err.to_string(),
                        };
                    }
                };
                if days > 0 {
                    self.store.persist(&self.meal_plan);
                }

                Event::PlanGenerated { start, days }
            }
        }
    }

    /// Add an ingredient to the next search and remember it in the history.
    /// Returns false when it is already listed.
    pub fn add_ingredient(&mut self, ingredient: &str) -> larder_shared::Result<bool> {
        let ingredient = ingredient.trim().to_lowercase();
        if ingredient.is_empty() {
            larder_shared::invalid!("Ingredient cannot be empty");
        }

        if self.ingredients.contains(&ingredient) {
            return Ok(false);
        }

        if self.history.record(&ingredient) {
            self.store.persist(&self.history);
        }

        self.ingredients.push(ingredient);

        Ok(true)
    }

    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        let ingredient = ingredient.trim().to_lowercase();
        let before = self.ingredients.len();
        self.ingredients.retain(|known| *known != ingredient);

        self.ingredients.len() != before
    }

    pub fn clear_ingredients(&mut self) {
        self.ingredients.clear();
    }

    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: u64) -> bool {
        let favorite = self.favorites.toggle(id);
        self.store.persist(&self.favorites);

        tracing::info!(id, favorite, "favorite toggled");

        favorite
    }

    pub fn add_shopping_item(&mut self, text: &str) -> larder_shared::Result<&ShoppingListItem> {
        self.shopping_list.add_manual(text)?;
        self.store.persist(&self.shopping_list);

        Ok(&self.shopping_list.items()[self.shopping_list.len() - 1])
    }

    pub fn toggle_shopping_item(&mut self, index: usize) -> larder_shared::Result<bool> {
        let checked = self.shopping_list.toggle(index)?;
        self.store.persist(&self.shopping_list);

        Ok(checked)
    }

    pub fn clear_shopping_list(&mut self) {
        self.shopping_list.clear();
        self.store.persist(&self.shopping_list);
    }

    pub fn assign_meal(
        &mut self,
        day: PlanDay,
        slot: MealSlot,
        meal: PlannedMeal,
    ) -> Option<PlannedMeal> {
        let replaced = self.meal_plan.assign(day, slot, meal);
        self.store.persist(&self.meal_plan);

        replaced
    }

    pub fn remove_meal(&mut self, day: PlanDay, slot: MealSlot) -> Option<PlannedMeal> {
        let removed = self.meal_plan.remove(day, slot)?;
        self.store.persist(&self.meal_plan);

        Some(removed)
    }

    pub fn sort_recipes(&mut self, option: SortOption) {
        sort_recipes(&mut self.recipes, option);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.preferences.toggle_theme();
        self.store.persist(&self.preferences);

        theme
    }

    pub fn update_filters(&mut self, update: impl FnOnce(&mut AdvancedFilters)) {
        update(&mut self.preferences.advanced_filters);
        self.store.persist(&self.preferences);
    }

    fn search_query(&self, options: &SearchOptions) -> SearchQuery {
        let filters = &self.preferences.advanced_filters;
        let mut query = SearchQuery::new(self.ingredients.iter().map(String::as_str));

        query.sort = options.sort.clone().unwrap_or_else(|| filters.sort.to_owned());
        query.max_ready_time = options.max_ready_time.unwrap_or(filters.max_ready_time);
        query.diet = options.diet;
        query.cuisine = options.cuisine.clone();
        query.intolerances = filters.intolerances.clone();
        query.equipment = filters.equipment.clone();

        query
    }

    fn filter_by_difficulty(&self, recipes: &mut Vec<Recipe>) {
        let Ok(wanted) = self
            .preferences
            .advanced_filters
            .difficulty
            .parse::<Difficulty>()
        else {
            return;
        };

        recipes.retain(|recipe| recipe.difficulty() == wanted);
    }
}

enum Task {
    Search(SearchQuery),
    Random,
    Category(String),
    Detail(u64),
    Favorites(Vec<u64>),
    Shopping(Vec<u64>),
    Plan(Date, Vec<u64>),
}

impl Task {
    async fn run(self, client: &Client) -> Result<Payload, ApiError> {
        let payload = match self {
            Task::Search(query) => Payload::Listing(client.complex_search(&query).await?),
            Task::Random => Payload::Listing(client.random(RANDOM_RESULTS, RANDOM_TAGS).await?),
            Task::Category(category) => Payload::Listing(client.by_category(&category).await?),
            Task::Detail(id) => Payload::Detail(Box::new(client.information(id).await?)),
            Task::Favorites(ids) => {
                Payload::Listing(client.information_bulk(&ids, false, Timeout::Short).await?)
            }
            Task::Shopping(ids) => {
                Payload::Shopping(client.information_bulk(&ids, false, Timeout::Long).await?)
            }
            Task::Plan(start, ids) => Payload::Plan {
                start,
                recipes: client.information_bulk(&ids, false, Timeout::Short).await?,
            },
        };

        Ok(payload)
    }
}
