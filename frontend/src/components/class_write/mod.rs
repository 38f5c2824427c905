//! New-class and edit-class page.
//!
//! The page keeps the whole draft; subcomponents that talk to browser SDKs
//! (editor, map, postcode) or upload files report changes through callbacks.

mod edit;
mod image;
mod submit;

pub use edit::ClassEdit;
use image::ClassImageUpload;

use crate::components::imports::*;
use crate::components::{
    AddressModal, AddressPicker, Calendar, ContentEditor, FieldError, KakaoMap, PageTitle,
};
use crate::sdk::daum::PostcodeAddress;
use chrono::NaiveDate;
use interfacing::graphql::SavedClass;
use interfacing::{
    effective_address, Category, ClassDetail, ClassDraft, ClassForm, Field, FormErrors, TotalTime,
};
use submit::{submit_class, SubmitError, SubmitMode};

pub struct ClassWrite {
    draft: ClassDraft,
    errors: FormErrors,
    picker: AddressPicker,
    submitting: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub is_edit: bool,
    #[prop_or_default]
    pub data: Option<Rc<ClassDetail>>,
}

pub enum Msg {
    FieldChanged(Field, String),
    CategoryChanged(Category),
    TotalTimeChanged(TotalTime),
    ContentChanged(String),
    ImagesChanged(Vec<String>),
    ScheduleChanged(Vec<NaiveDate>),
    ToggleAddressModal,
    AddressPicked(PostcodeAddress),
    Submit,
    Submitted(SubmitMode, Result<SavedClass, SubmitError>),
    Cancel,
}

impl Component for ClassWrite {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let draft = match ctx.props().data.as_deref() {
            Some(detail) => ClassDraft {
                form: ClassForm::from(detail),
                address: detail.address.clone(),
                image_urls: detail.image_urls(),
                schedule: detail.schedule_dates(),
            },
            None => ClassDraft::default(),
        };

        Self {
            draft,
            errors: FormErrors::default(),
            picker: AddressPicker::default(),
            submitting: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_edit = ctx.props().is_edit;
        let data = ctx.props().data.as_deref();

        let wrapper_style = css!(
            "
            max-width: 792px;
            margin: 0 auto;
            padding: 60px 0 120px;
        "
        );

        let header_style = css!(
            "
            font-size: 28px;
            font-weight: 700;
            padding-bottom: 24px;
            border-bottom: 2px solid #111111;
            margin-bottom: 40px;
        "
        );

        let body_style = css!(
            "
            display: flex;
            flex-direction: column;

            label.field {
                font-size: 16px;
                font-weight: 700;
                margin: 28px 0 12px;
            }

            input.text, select {
                width: 100%;
                height: 48px;
                padding: 0 16px;
                border: 1px solid #d9d9d9;
                border-radius: 8px;
                font-size: 15px;
            }

            input.short {
                width: 384px;
            }

            select {
                width: 384px;
                background-color: #ffffff;
            }
        "
        );

        let middle_style = css!(
            "
            display: flex;
            justify-content: space-between;

            & > div {
                display: flex;
                flex-direction: column;
            }
        "
        );

        let map_block_style = css!(
            "
            display: flex;
            justify-content: space-between;
        "
        );

        let map_right_style = css!(
            "
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            width: 384px;

            .search {
                display: flex;
                gap: 8px;
            }

            .search input {
                flex: 1;
                background-color: #f5f5f5;
            }

            .search button {
                width: 100px;
                border: none;
                border-radius: 8px;
                background-color: #111111;
                color: #ffffff;
                cursor: pointer;
            }

            .detail-label {
                font-size: 14px;
                margin-bottom: 8px;
            }
        "
        );

        let bank_style = css!(
            "
            display: flex;
            justify-content: space-between;

            & > div {
                display: flex;
                flex-direction: column;
            }
        "
        );

        let buttons_style = css!(
            "
            display: flex;
            justify-content: center;
            gap: 16px;
            margin-top: 60px;

            button {
                width: 180px;
                height: 52px;
                border-radius: 8px;
                font-size: 16px;
                font-weight: 700;
                cursor: pointer;
            }

            button.cancel {
                border: 1px solid #d9d9d9;
                background-color: #ffffff;
            }

            button.submit {
                border: none;
                background-color: #f28316;
                color: #ffffff;
            }

            button.submit:disabled {
                opacity: 0.6;
                cursor: default;
            }
        "
        );

        let heading = if is_edit { "클래스 수정" } else { "신규 클래스 개설" };
        let address = self.address(ctx);

        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let oncancel = ctx.link().callback(|_: MouseEvent| Msg::Cancel);
        let ontoggle_modal = ctx.link().callback(|_: ()| Msg::ToggleAddressModal);
        let onsearch = ctx.link().callback(|_: MouseEvent| Msg::ToggleAddressModal);
        let onaddress = ctx.link().callback(Msg::AddressPicked);
        let oncontent = ctx.link().callback(Msg::ContentChanged);
        let onimages = ctx.link().callback(Msg::ImagesChanged);
        let onschedule = ctx.link().callback(Msg::ScheduleChanged);

        let oncategory = ctx.link().batch_callback(|event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            Category::try_from(value.as_str()).ok().map(Msg::CategoryChanged)
        });
        let ontotal_time = ctx.link().batch_callback(|event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            TotalTime::try_from(value.as_str()).ok().map(Msg::TotalTimeChanged)
        });

        let form = &self.draft.form;

        html! {
            <div class={wrapper_style}>
                <PageTitle title={heading}/>

                if self.picker.is_open() {
                    <AddressModal ontoggle={ontoggle_modal} oncomplete={onaddress}/>
                }

                <div class={header_style}>{ heading }</div>

                <form {onsubmit}>
                    <div class={body_style}>
                        <label class="field">{ "카테고리를 선택해주세요" }</label>
                        <select onchange={oncategory}>
                            { for Category::ALL.iter().map(|category| html! {
                                <option value={category.label()} selected={*category == form.category}>
                                    { category.label() }
                                </option>
                            }) }
                        </select>

                        <label class="field">{ "클래스 이름을 입력해주세요" }</label>
                        { self.text_input(ctx, Field::Title, "클래스 이름을 입력해주세요", "text") }
                        <FieldError message={self.errors.message(Field::Title)}/>

                        <label class="field">{ "클래스 한줄요약을 입력해주세요" }</label>
                        { self.text_input(ctx, Field::ContentSummary, "클래스 한줄요약을 입력해주세요", "text") }
                        <FieldError message={self.errors.message(Field::ContentSummary)}/>

                        <label class="field">{ "대표 이미지를 올려주세요 (최대 5개까지 업로드 가능)" }</label>
                        <ClassImageUpload initial={self.draft.image_urls.clone()} onchange={onimages}/>

                        <div class={middle_style}>
                            <div>
                                <label class="field">{ "클래스 소요 시간을 선택해주세요" }</label>
                                <select onchange={ontotal_time}>
                                    { for TotalTime::ALL.iter().map(|total_time| html! {
                                        <option value={total_time.label()} selected={*total_time == form.total_time}>
                                            { total_time.label() }
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label class="field">{ "클래스 최대 인원을 입력해주세요" }</label>
                                { self.text_input(ctx, Field::ClassMNum, "숫자만 입력해주세요", "text short") }
                                <FieldError message={self.errors.message(Field::ClassMNum)}/>
                            </div>
                        </div>

                        <label class="field">{ "클래스 가격을 입력해주세요" }</label>
                        { self.text_input(ctx, Field::Price, "숫자만 입력해주세요", "text") }
                        <FieldError message={self.errors.message(Field::Price)}/>

                        <label class="field">{ "클래스 위치를 입력해주세요" }</label>
                        <div class={map_block_style}>
                            <KakaoMap address={address.clone()}/>
                            <div class={map_right_style}>
                                <div class="search">
                                    <input class="text" type="text" readonly={true} value={address}/>
                                    <button type="button" onclick={onsearch}>{ "주소 검색" }</button>
                                </div>
                                <div>
                                    <div class="detail-label">{ "상세주소 입력" }</div>
                                    { self.text_input(ctx, Field::AddressDetail, "상세주소를 입력해주세요", "text") }
                                    <FieldError message={self.errors.message(Field::AddressDetail)}/>
                                </div>
                            </div>
                        </div>

                        <label class="field">{ "클래스 세부내용을 작성해주세요" }</label>
                        <ContentEditor
                            initial={data.map(|detail| detail.content.clone()).unwrap_or_default()}
                            onchange={oncontent}
                        />

                        <label class="field">{ "클래스 일정을 선택해주세요" }</label>
                        <Calendar selected={self.draft.schedule.clone()} onchange={onschedule}/>

                        <label class="field">{ "입금 계좌를 작성해주세요" }</label>
                        { self.text_input(ctx, Field::AccountNum, "'-' 빼고 숫자만 입력해주세요.", "text") }
                        <FieldError message={self.errors.message(Field::AccountNum)}/>

                        <div class={bank_style}>
                            <div>
                                <label class="field">{ "예금주를 작성해주세요" }</label>
                                { self.text_input(ctx, Field::AccountName, "예금주를 작성해주세요", "text short") }
                                <FieldError message={self.errors.message(Field::AccountName)}/>
                            </div>
                            <div>
                                <label class="field">{ "입금 은행을 작성해주세요" }</label>
                                { self.text_input(ctx, Field::BankName, "입금 은행을 작성해주세요", "text short") }
                                <FieldError message={self.errors.message(Field::BankName)}/>
                            </div>
                        </div>

                        <div class={buttons_style}>
                            <button type="button" class="cancel" onclick={oncancel}>{ "취소" }</button>
                            <button type="submit" class="submit" disabled={self.submitting}>
                                { if is_edit { "수정" } else { "등록" } }
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(field, value) => {
                self.errors.revalidate(field, &value);
                self.draft.form.set(field, value);
                true
            }
            Msg::CategoryChanged(category) => {
                self.draft.form.category = category;
                true
            }
            Msg::TotalTimeChanged(total_time) => {
                self.draft.form.total_time = total_time;
                true
            }
            // the editor renders its own content
            Msg::ContentChanged(content) => {
                self.draft.form.content = content;
                false
            }
            Msg::ImagesChanged(urls) => {
                self.draft.image_urls = urls;
                false
            }
            Msg::ScheduleChanged(dates) => {
                self.draft.schedule = dates;
                true
            }
            Msg::ToggleAddressModal => {
                self.picker.toggle();
                true
            }
            Msg::AddressPicked(address) => {
                console::log!(format!("address picked: {}", address.address));
                self.picker.complete(address);
                true
            }
            Msg::Submit => self.submit(ctx),
            Msg::Submitted(mode, Ok(saved)) => {
                console::log!(format!("class saved: {}", saved.class_id));
                self.submitting = false;
                alert(mode.done_message());
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::ClassDetail {
                        class_id: saved.class_id,
                    });
                }
                false
            }
            Msg::Submitted(_, Err(SubmitError::Invalid(errors))) => {
                self.submitting = false;
                self.errors = errors;
                true
            }
            Msg::Submitted(_, Err(e)) => {
                console::error!(format!("class submit failed: {:?}", e));
                self.submitting = false;
                alert(&e.to_string());
                true
            }
            Msg::Cancel => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.back();
                }
                false
            }
        }
    }
}

impl ClassWrite {
    fn address(&self, ctx: &Context<Self>) -> String {
        let saved = ctx.props().data.as_deref().map(|detail| detail.address.as_str());
        effective_address(self.picker.picked(), saved)
    }

    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        placeholder: &'static str,
        class: &'static str,
    ) -> Html {
        let oninput = ctx.link().callback(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            Msg::FieldChanged(field, value)
        });

        html! {
            <input type="text" {class} {placeholder} {oninput}
                value={self.draft.form.value(field).to_owned()}
            />
        }
    }

    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.submitting {
            return false;
        }

        if let Err(errors) = self.draft.form.validate() {
            console::log!(format!("class form has {} invalid fields", errors.len()));
            self.errors = errors;
            return true;
        }

        let mode = match SubmitMode::new(ctx.props().is_edit, ctx.props().data.as_deref()) {
            Ok(mode) => mode,
            Err(e) => {
                alert(&e.to_string());
                return false;
            }
        };

        let mut draft = self.draft.clone();
        draft.address = self.address(ctx);

        let client = GraphQLClient::new(&conf_of(ctx).graphql);
        ctx.link().send_future(async move {
            let result = submit_class(&client, &mode, &draft).await;
            Msg::Submitted(mode, result)
        });

        self.submitting = true;
        true
    }
}
