use crate::components::imports::*;
use crate::components::{ClassWrite, ErrorMessage};
use interfacing::graphql::{ClassIdVariables, FetchClassDetail};
use interfacing::ClassDetail;

pub struct ClassEdit {
    class: Option<Rc<ClassDetail>>,
    error: Option<GraphQLError>,
}

pub enum Msg {
    ClassLoaded(ClassDetail),
    LoadFailed(GraphQLError),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub class_id: String,
}

impl Component for ClassEdit {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            class: None,
            error: None,
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match (&self.class, &self.error) {
            (Some(class), _) => html! {
                <ClassWrite is_edit={true} data={class.clone()}/>
            },
            (None, Some(_)) => html! {
                <ErrorMessage message={"클래스 정보를 불러오지 못했습니다"}/>
            },
            (None, None) => html! {},
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let class_id = ctx.props().class_id.clone();
            let client = GraphQLClient::new(&conf_of(ctx).graphql);
            ctx.link().send_future(async move {
                match client
                    .execute::<FetchClassDetail>(ClassIdVariables { class_id })
                    .await
                {
                    Ok(data) => Msg::ClassLoaded(data.class),
                    Err(e) => Msg::LoadFailed(e),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ClassLoaded(class) => {
                console::log!(format!("class {} loaded for editing", class.class_id));
                self.class = Some(Rc::new(class));
                true
            }
            Msg::LoadFailed(e) => {
                console::error!(format!("failed to load class: {}", e));
                self.error = Some(e);
                true
            }
        }
    }
}
